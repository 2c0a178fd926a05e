mod common;

use common::{error_code, TestContext};
use entity::sea_orm_active_enums::UserRole;

#[tokio::test]
async fn test_register_login_refresh_flow() {
    println!("\n\n[+] Running test: test_register_login_refresh_flow");
    let ctx = TestContext::new().await;

    println!("[>] Registering a new account.");
    let resp = ctx
        .exec(
            r#"mutation {
                register(input: { email: "driver@example.com", name: "Driver", password: "password123" }) {
                    accessToken
                    refreshToken
                    user { email role isActive }
                }
            }"#,
            None,
        )
        .await;
    println!("[<] Register response: {}", resp);
    assert!(resp["errors"].is_null());
    let payload = &resp["data"]["register"];
    assert_eq!(payload["user"]["email"], "driver@example.com");
    assert_eq!(payload["user"]["role"], "CLIENT");
    assert_eq!(payload["user"]["isActive"], true);
    assert!(!payload["accessToken"].as_str().unwrap().is_empty());
    let refresh = payload["refreshToken"].as_str().unwrap().to_string();

    println!("[>] Logging in with the same credentials.");
    let resp = ctx
        .exec(
            r#"mutation {
                login(input: { email: "driver@example.com", password: "password123" }) {
                    accessToken
                    user { email }
                }
            }"#,
            None,
        )
        .await;
    println!("[<] Login response: {}", resp);
    assert!(resp["errors"].is_null());
    assert_eq!(resp["data"]["login"]["user"]["email"], "driver@example.com");

    println!("[>] Refreshing the session.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{ refreshToken(token: "{}") {{ accessToken user {{ email }} }} }}"#,
                refresh
            ),
            None,
        )
        .await;
    println!("[<] Refresh response: {}", resp);
    assert!(resp["errors"].is_null());
    assert!(!resp["data"]["refreshToken"]["accessToken"]
        .as_str()
        .unwrap()
        .is_empty());
    println!("[/] Test passed: register, login and refresh all succeeded.");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    println!("\n\n[+] Running test: test_login_failures_are_indistinguishable");
    let ctx = TestContext::new().await;
    ctx.seed_user("known@example.com", UserRole::Client).await;

    println!("[>] Logging in with a wrong password.");
    let wrong_password = ctx
        .exec(
            r#"mutation { login(input: { email: "known@example.com", password: "not-the-password" }) { accessToken } }"#,
            None,
        )
        .await;
    println!("[<] Response: {}", wrong_password);
    assert_eq!(error_code(&wrong_password), "AUTHENTICATION_ERROR");

    println!("[>] Logging in with an unknown email.");
    let unknown_email = ctx
        .exec(
            r#"mutation { login(input: { email: "nobody@example.com", password: "password123" }) { accessToken } }"#,
            None,
        )
        .await;
    println!("[<] Response: {}", unknown_email);
    assert_eq!(error_code(&unknown_email), "AUTHENTICATION_ERROR");

    // Same code and message for both failure modes.
    assert_eq!(
        wrong_password["errors"][0]["message"],
        unknown_email["errors"][0]["message"]
    );
    println!("[/] Test passed: both failures look identical to the caller.");
}

#[tokio::test]
async fn test_me_returns_viewer_with_permissions() {
    println!("\n\n[+] Running test: test_me_returns_viewer_with_permissions");
    let ctx = TestContext::new().await;

    println!("[>] Querying me without credentials.");
    let resp = ctx.exec(r#"query { me { user { email } } }"#, None).await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "AUTHENTICATION_ERROR");

    let admin = ctx.seed_user("admin@example.com", UserRole::Admin).await;
    println!("[>] Querying me as an admin.");
    let resp = ctx
        .exec(
            r#"query {
                me {
                    user { email role }
                    permissions { canManageUsers canCreateReservations canScanQr }
                }
            }"#,
            Some(admin),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert!(resp["errors"].is_null());
    let me = &resp["data"]["me"];
    assert_eq!(me["user"]["role"], "ADMIN");
    assert_eq!(me["permissions"]["canManageUsers"], true);
    assert_eq!(me["permissions"]["canScanQr"], true);
    println!("[/] Test passed: viewer carries the resolved capability set.");
}
