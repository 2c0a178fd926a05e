mod common;

use common::{error_code, TestContext};
use entity::sea_orm_active_enums::UserRole;
use parkit::graphql::CurrentUser;

async fn create_company(ctx: &TestContext, admin: CurrentUser) -> String {
    let resp = ctx
        .exec(
            r#"mutation {
                createCompany(input: { name: "Acme Parking", email: "ops@acme.example" }) { id name }
            }"#,
            Some(admin),
        )
        .await;
    assert!(resp["errors"].is_null(), "createCompany failed: {}", resp);
    resp["data"]["createCompany"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_company_and_parking_crud_flow() {
    println!("\n\n[+] Running test: test_company_and_parking_crud_flow");
    let ctx = TestContext::new().await;
    let admin = ctx.seed_user("admin@example.com", UserRole::Admin).await;

    println!("[>] Creating company.");
    let company_id = create_company(&ctx, admin).await;
    println!("[<] Company created: {}", company_id);

    println!("[>] Creating parking.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createParking(input: {{
                        name: "Garage A",
                        address: "1 Main St",
                        capacity: 50,
                        pricePerHour: 2.5,
                        companyId: "{company_id}"
                    }}) {{ id status capacity pricePerHour }}
                }}"#
            ),
            Some(admin),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert!(resp["errors"].is_null());
    let parking = &resp["data"]["createParking"];
    assert_eq!(parking["status"], "AVAILABLE");
    assert_eq!(parking["capacity"], 50);
    let parking_id = parking["id"].as_str().unwrap().to_string();

    println!("[>] Updating parking price and status.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    updateParking(id: "{parking_id}", input: {{ pricePerHour: 3.0, status: MAINTENANCE }}) {{
                        pricePerHour status
                    }}
                }}"#
            ),
            Some(admin),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert!(resp["errors"].is_null());
    assert_eq!(resp["data"]["updateParking"]["status"], "MAINTENANCE");
    assert_eq!(resp["data"]["updateParking"]["pricePerHour"], 3.0);

    println!("[>] Deleting parking.");
    let resp = ctx
        .exec(
            &format!(r#"mutation {{ deleteParking(id: "{parking_id}") }}"#),
            Some(admin),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(resp["data"]["deleteParking"], true);

    println!("[>] Fetching the deleted parking.");
    let resp = ctx
        .exec(
            &format!(r#"query {{ parking(id: "{parking_id}") {{ id }} }}"#),
            Some(admin),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "NOT_FOUND");
    println!("[/] Test passed: full parking lifecycle works.");
}

#[tokio::test]
async fn test_pagination_counts_pages() {
    println!("\n\n[+] Running test: test_pagination_counts_pages");
    let ctx = TestContext::new().await;
    let admin = ctx.seed_user("admin@example.com", UserRole::Admin).await;
    let company_id = create_company(&ctx, admin).await;

    println!("[>] Creating five parkings.");
    for i in 0..5 {
        let resp = ctx
            .exec(
                &format!(
                    r#"mutation {{
                        createParking(input: {{
                            name: "Garage {i}",
                            address: "{i} Main St",
                            capacity: 10,
                            pricePerHour: 1.0,
                            companyId: "{company_id}"
                        }}) {{ id }}
                    }}"#
                ),
                Some(admin),
            )
            .await;
        assert!(resp["errors"].is_null(), "createParking failed: {}", resp);
    }

    println!("[>] Listing page 1 with limit 2.");
    let resp = ctx
        .exec(
            r#"query {
                parkings(page: 1, limit: 2) {
                    data { id }
                    pagination { page limit total pages }
                }
            }"#,
            Some(admin),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert!(resp["errors"].is_null());
    let page = &resp["data"]["parkings"];
    assert_eq!(page["data"].as_array().unwrap().len(), 2);
    assert_eq!(page["pagination"]["total"], 5);
    assert_eq!(page["pagination"]["pages"], 3);

    println!("[>] Listing with an out-of-range limit.");
    let resp = ctx
        .exec(
            r#"query { parkings(page: 1, limit: 500) { pagination { total } } }"#,
            Some(admin),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "VALIDATION_ERROR");
    println!("[/] Test passed: pagination metadata is consistent.");
}

#[tokio::test]
async fn test_validation_errors_carry_field_details() {
    println!("\n\n[+] Running test: test_validation_errors_carry_field_details");
    let ctx = TestContext::new().await;
    let admin = ctx.seed_user("admin@example.com", UserRole::Admin).await;
    let company_id = create_company(&ctx, admin).await;

    println!("[>] Creating a parking with an empty name and zero capacity.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createParking(input: {{
                        name: "",
                        address: "1 Main St",
                        capacity: 0,
                        pricePerHour: 1.0,
                        companyId: "{company_id}"
                    }}) {{ id }}
                }}"#
            ),
            Some(admin),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "VALIDATION_ERROR");
    let details = &resp["errors"][0]["extensions"]["details"];
    assert!(details["name"].is_string());
    assert!(details["capacity"].is_string());
    println!("[/] Test passed: each invalid field is reported by name.");
}

#[tokio::test]
async fn test_clients_cannot_manage_the_catalog() {
    println!("\n\n[+] Running test: test_clients_cannot_manage_the_catalog");
    let ctx = TestContext::new().await;
    let client = ctx.seed_user("client@example.com", UserRole::Client).await;

    println!("[>] Creating a company as a client.");
    let resp = ctx
        .exec(
            r#"mutation { createCompany(input: { name: "Rogue", email: "r@example.com" }) { id } }"#,
            Some(client),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "AUTHORIZATION_ERROR");

    println!("[>] Listing users as a client.");
    let resp = ctx
        .exec(r#"query { users { pagination { total } } }"#, Some(client))
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "AUTHORIZATION_ERROR");
    println!("[/] Test passed: catalog management is denied for clients.");
}

#[tokio::test]
async fn test_vehicle_ownership_rules() {
    println!("\n\n[+] Running test: test_vehicle_ownership_rules");
    let ctx = TestContext::new().await;
    let alice = ctx.seed_user("alice@example.com", UserRole::Client).await;
    let bob = ctx.seed_user("bob@example.com", UserRole::Client).await;

    println!("[>] Registering a vehicle as alice.");
    let resp = ctx
        .exec(
            r#"mutation {
                createVehicle(input: { licensePlate: "AA-123-BB", make: "Fiat", model: "500", year: 2020 }) {
                    id userId
                }
            }"#,
            Some(alice),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert!(resp["errors"].is_null());
    let vehicle_id = resp["data"]["createVehicle"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(
        resp["data"]["createVehicle"]["userId"],
        alice.id.to_string()
    );

    println!("[>] Registering the same plate again.");
    let resp = ctx
        .exec(
            r#"mutation {
                createVehicle(input: { licensePlate: "AA-123-BB", make: "Fiat", model: "500", year: 2020 }) { id }
            }"#,
            Some(bob),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "CONFLICT");

    println!("[>] Deleting alice's vehicle as bob.");
    let resp = ctx
        .exec(
            &format!(r#"mutation {{ deleteVehicle(id: "{vehicle_id}") }}"#),
            Some(bob),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "AUTHORIZATION_ERROR");
    println!("[/] Test passed: vehicles are private to their owner.");
}
