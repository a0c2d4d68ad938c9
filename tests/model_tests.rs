#[cfg(test)]
pub mod model_tests {
    use serde_json::json;

    use profile_site::api::AssetKind;
    use profile_site::common::ManagerError;
    use profile_site::manager::fields::{self, FieldKind, FieldSpec};
    use profile_site::manager::{GalleryResource, MessageResource, Resource, SpeechResource};
    use profile_site::models::*;

    #[test]
    fn test_lenient_decode_of_loose_server_values() {
        let event: JourneyEvent = serde_json::from_value(json!({
            "id": "7",
            "year": 2014,
            "titleEn": null,
            "titleHi": "संसद",
            "unknownField": true
        }))
        .unwrap();

        assert_eq!(event.id, Some(ItemId::Text("7".into())));
        assert_eq!(event.year, "2014");
        assert_eq!(event.title_en, "");
        assert_eq!(event.title_hi, "संसद");
        assert_eq!(event.category, "");
    }

    #[test]
    fn test_blank_id_reads_as_unsaved() {
        let speech: Speech = serde_json::from_value(json!({ "id": "", "titleEn": "x" })).unwrap();
        let missing: Speech = serde_json::from_value(json!({ "titleEn": "x" })).unwrap();

        assert_eq!(speech.id, None);
        assert_eq!(missing.id, None);
        assert!(serde_json::to_value(&speech).unwrap().get("id").is_none());
    }

    #[test]
    fn test_item_id_display_and_order() {
        assert_eq!(ItemId::from(12).to_string(), "12");
        assert_eq!(ItemId::from("abc").as_number(), None);
        assert_eq!(ItemId::from("42").as_number(), Some(42));
        assert!(ItemId::from(9) < ItemId::from(10));
        assert!(ItemId::from("10") > ItemId::from(9));
        assert!(ItemId::from(1000) < ItemId::from("draft"));
    }

    #[test]
    fn test_gallery_sort_order_accepts_strings() {
        let item: GalleryItem =
            serde_json::from_value(json!({ "type": "video", "sortOrder": "4" })).unwrap();

        assert_eq!(item.kind, GalleryKind::Video);
        assert_eq!(item.sort_order, 4);
        assert_eq!(
            serde_json::to_value(&item).unwrap()["sortOrder"],
            json!(4)
        );
    }

    #[test]
    fn test_gallery_missing_duration_follows_kind() {
        let video: GalleryItem = serde_json::from_value(json!({ "type": "video" })).unwrap();
        let null_video: GalleryItem =
            serde_json::from_value(json!({ "type": "video", "duration": null })).unwrap();
        let photo: GalleryItem = serde_json::from_value(json!({ "type": "photo" })).unwrap();
        let timed: GalleryItem =
            serde_json::from_value(json!({ "type": "video", "duration": "03:15" })).unwrap();

        assert_eq!(video.duration, "00:00");
        assert_eq!(null_video.duration, "00:00");
        assert_eq!(photo.duration, "");
        assert_eq!(photo.date, today());
        assert_eq!(timed.duration, "03:15");
    }

    #[test]
    fn test_gallery_template_follows_item_kind() {
        let video = GalleryItem {
            duration: String::new(),
            ..GalleryItem::empty(GalleryKind::Video)
        };

        assert_eq!(GalleryResource::template_for(&video).duration, "00:00");
        assert_eq!(GalleryResource::template_for(&video).kind, GalleryKind::Video);
    }

    #[test]
    fn test_gallery_empty_video_has_zero_duration() {
        assert_eq!(GalleryItem::empty(GalleryKind::Video).duration, "00:00");
        assert_eq!(GalleryItem::empty(GalleryKind::Photo).duration, "");
        assert_eq!(GalleryItem::empty(GalleryKind::Photo).date, today());
    }

    #[test]
    fn test_media_validate_per_kind() {
        let release = MediaItem::default();
        let interview = MediaItem {
            kind: MediaKind::Interview,
            ..MediaItem::default()
        };
        let photo = MediaItem {
            kind: MediaKind::Photo,
            image_url: "https://img.example/p.jpg".into(),
            ..MediaItem::default()
        };

        assert_eq!(release.validate(), Ok(()));
        assert_eq!(
            interview.validate(),
            Err("An interview needs a video URL.".to_string())
        );
        assert_eq!(photo.validate(), Ok(()));
        assert_eq!(photo.preview_url(), Some("https://img.example/p.jpg"));
    }

    #[test]
    fn test_media_kind_wire_names() {
        let item: MediaItem = serde_json::from_value(json!({ "type": "press_release" })).unwrap();

        assert_eq!(item.kind, MediaKind::PressRelease);
        assert_eq!("interview".parse::<MediaKind>(), Ok(MediaKind::Interview));
        assert!("podcast".parse::<MediaKind>().is_err());
        assert!(MediaKind::Photo == "photo");
    }

    #[test]
    fn test_whatsapp_link_prefills_message() {
        let message = ContactMessage {
            name: "Asha".into(),
            email: "asha@example.org".into(),
            message: "Road repair needed".into(),
            ..ContactMessage::default()
        };

        assert_eq!(
            message.whatsapp_link("919876543210"),
            "https://wa.me/919876543210?text=Name%3A%20Asha%0AEmail%3A%20asha%40example.org%0AMessage%3A%20Road%20repair%20needed"
        );
    }

    #[test]
    fn test_language_toggle_and_pick() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::En.toggle(), Language::Hi);
        assert_eq!(Language::Hi.pick("Home", "होम"), "होम");
        assert_eq!("HI".parse::<Language>(), Ok(Language::Hi));
    }

    #[test]
    fn test_fields_read_and_write() {
        let speech = Speech {
            title_en: "Budget".into(),
            ..Speech::default()
        };
        let title = SpeechResource::field("titleEn").unwrap();

        assert_eq!(fields::read(&speech, "titleEn").unwrap(), "Budget");
        assert_eq!(fields::read(&speech, "id").unwrap(), "");

        let renamed = fields::write(&speech, title, "Budget 2025").unwrap();
        assert_eq!(renamed.title_en, "Budget 2025");
        assert_eq!(speech.title_en, "Budget");
    }

    #[test]
    fn test_fields_write_number_and_read_only() {
        let order = FieldSpec::new("sortOrder", "Order", FieldKind::Number);
        let item = GalleryItem::empty(GalleryKind::Photo);

        assert_eq!(fields::write(&item, &order, " 7 ").unwrap().sort_order, 7);
        assert_eq!(fields::write(&item, &order, "").unwrap().sort_order, 0);
        assert!(matches!(
            fields::write(&item, &order, "seven"),
            Err(ManagerError::Field(_))
        ));

        let name = MessageResource::field("name").unwrap();
        assert!(matches!(
            fields::write(&ContactMessage::default(), name, "x"),
            Err(ManagerError::Field(_))
        ));
    }

    #[test]
    fn test_gallery_url_field_follows_item_kind() {
        let url = GalleryResource::field("url").unwrap();
        let thumbnail = GalleryResource::field("thumbnail").unwrap();
        let video = GalleryItem::empty(GalleryKind::Video);

        assert_eq!(GalleryResource::asset_kind(&video, url), Some(AssetKind::Video));
        assert_eq!(
            GalleryResource::asset_kind(&GalleryItem::empty(GalleryKind::Photo), url),
            Some(AssetKind::Image)
        );
        assert_eq!(GalleryResource::asset_kind(&video, thumbnail), Some(AssetKind::Image));
        assert_eq!(GalleryResource::field("title"), None);
    }

    #[test]
    fn test_merge_over_prefers_item_values() {
        let template = GalleryItem::empty(GalleryKind::Video);
        let partial: GalleryItem = serde_json::from_value(json!({
            "id": 3,
            "type": "video",
            "titleEn": "Clip",
            "duration": ""
        }))
        .unwrap();

        let merged = fields::merge_over(&template, &partial).unwrap();

        assert_eq!(merged.id, Some(ItemId::Number(3)));
        assert_eq!(merged.title_en, "Clip");
        assert_eq!(merged.duration, "");
    }
}
