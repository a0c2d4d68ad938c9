#[cfg(test)]
pub mod router_tests {
    use profile_site::router::guard::{self, GuardDecision};
    use profile_site::router::ManagerRoute;
    use profile_site::services::Session;

    fn admin() -> Session {
        Session {
            token: Some("token".into()),
            is_authenticated: true,
            is_admin: true,
            user: Some("admin".into()),
        }
    }

    #[test]
    fn test_guard_renders_for_admin() {
        assert_eq!(guard::check(&admin(), "/dashboard/speeches"), GuardDecision::Render);
    }

    #[test]
    fn test_guard_redirects_anonymous_with_return_path() {
        let decision = guard::check(&Session::anonymous(), "/dashboard/gallery");

        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: "/admin/login?from=%2Fdashboard%2Fgallery".into()
            }
        );
    }

    #[test]
    fn test_guard_redirects_authenticated_non_admin() {
        let session = Session {
            is_admin: false,
            ..admin()
        };

        assert!(matches!(
            guard::check(&session, "/dashboard"),
            GuardDecision::Redirect { .. }
        ));
    }

    #[test]
    fn test_guard_ignores_stale_token_without_session() {
        let session = Session {
            token: Some("leftover".into()),
            ..Session::anonymous()
        };

        assert!(matches!(
            guard::check(&session, "/dashboard/journey"),
            GuardDecision::Redirect { .. }
        ));
    }

    #[test]
    fn test_login_redirect_keeps_query() {
        assert_eq!(
            guard::login_redirect("/dashboard/speeches?page=2"),
            "/admin/login?from=%2Fdashboard%2Fspeeches%3Fpage%3D2"
        );
        assert_eq!(guard::login_redirect(""), "/admin/login");
        assert_eq!(guard::login_redirect("/admin/login"), "/admin/login");
    }

    #[test]
    fn test_return_target_defaults_to_dashboard() {
        assert_eq!(guard::return_target(None), "/dashboard");
        assert_eq!(guard::return_target(Some("")), "/dashboard");
        assert_eq!(guard::return_target(Some("https://evil.example")), "/dashboard");
        assert_eq!(guard::return_target(Some("//evil.example")), "/dashboard");
        assert_eq!(guard::return_target(Some("/\\evil.example")), "/dashboard");
        assert_eq!(guard::return_target(Some(" /\\evil.example/path")), "/dashboard");
        assert_eq!(guard::return_target(Some("/\t/evil.example")), "/dashboard");
        assert_eq!(guard::return_target(Some("/admin/login")), "/dashboard");
        assert_eq!(
            guard::return_target(Some("/dashboard/messages")),
            "/dashboard/messages"
        );
    }

    #[test]
    fn test_manager_routes_live_under_dashboard() {
        for manager in ManagerRoute::ALL {
            assert_eq!(manager.path(), format!("/dashboard/{}", manager.segment()));
        }

        assert_eq!(ManagerRoute::Gallery.path(), "/dashboard/gallery");
        assert_eq!(ManagerRoute::PressRelease.path(), "/dashboard/press-release");
    }
}
