mod common;

use common::{error_code, TestContext};
use entity::sea_orm_active_enums::UserRole;
use parkit::graphql::CurrentUser;

struct Fixture {
    company_id: String,
    parking_id: String,
    vehicle_id: String,
    admin: CurrentUser,
    client: CurrentUser,
}

/// One company, one 5.0/hour parking, one client with a vehicle.
async fn setup(ctx: &TestContext) -> Fixture {
    let admin = ctx.seed_user("admin@example.com", UserRole::Admin).await;
    let client = ctx.seed_user("client@example.com", UserRole::Client).await;

    let resp = ctx
        .exec(
            r#"mutation { createCompany(input: { name: "Acme Parking", email: "ops@acme.example" }) { id } }"#,
            Some(admin),
        )
        .await;
    assert!(resp["errors"].is_null(), "createCompany failed: {}", resp);
    let company_id = resp["data"]["createCompany"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createParking(input: {{
                        name: "Garage A",
                        address: "1 Main St",
                        capacity: 10,
                        pricePerHour: 5.0,
                        companyId: "{company_id}"
                    }}) {{ id }}
                }}"#
            ),
            Some(admin),
        )
        .await;
    assert!(resp["errors"].is_null(), "createParking failed: {}", resp);
    let parking_id = resp["data"]["createParking"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let resp = ctx
        .exec(
            r#"mutation {
                createVehicle(input: { licensePlate: "CC-456-DD", make: "Renault", model: "Zoe", year: 2022 }) { id }
            }"#,
            Some(client),
        )
        .await;
    assert!(resp["errors"].is_null(), "createVehicle failed: {}", resp);
    let vehicle_id = resp["data"]["createVehicle"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    Fixture {
        company_id,
        parking_id,
        vehicle_id,
        admin,
        client,
    }
}

async fn book(ctx: &TestContext, fx: &Fixture) -> String {
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createReservation(input: {{
                        vehicleId: "{}",
                        parkingId: "{}",
                        startTime: "2026-09-01T10:00:00Z",
                        endTime: "2026-09-01T12:00:00Z"
                    }}) {{ id }}
                }}"#,
                fx.vehicle_id, fx.parking_id
            ),
            Some(fx.client),
        )
        .await;
    assert!(resp["errors"].is_null(), "createReservation failed: {}", resp);
    resp["data"]["createReservation"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_price_is_derived_from_duration() {
    println!("\n\n[+] Running test: test_price_is_derived_from_duration");
    let ctx = TestContext::new().await;
    let fx = setup(&ctx).await;

    println!("[>] Booking two hours without a price.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createReservation(input: {{
                        vehicleId: "{}",
                        parkingId: "{}",
                        startTime: "2026-09-01T10:00:00Z",
                        endTime: "2026-09-01T12:00:00Z"
                    }}) {{ status totalPrice userId }}
                }}"#,
                fx.vehicle_id, fx.parking_id
            ),
            Some(fx.client),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert!(resp["errors"].is_null());
    let reservation = &resp["data"]["createReservation"];
    assert_eq!(reservation["status"], "PENDING");
    assert_eq!(reservation["totalPrice"], 10.0);
    assert_eq!(reservation["userId"], fx.client.id.to_string());
    println!("[/] Test passed: two hours at 5.0 per hour priced at 10.0.");
}

#[tokio::test]
async fn test_inverted_time_range_is_rejected() {
    println!("\n\n[+] Running test: test_inverted_time_range_is_rejected");
    let ctx = TestContext::new().await;
    let fx = setup(&ctx).await;

    println!("[>] Booking with endTime before startTime.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createReservation(input: {{
                        vehicleId: "{}",
                        parkingId: "{}",
                        startTime: "2026-09-01T12:00:00Z",
                        endTime: "2026-09-01T10:00:00Z"
                    }}) {{ id }}
                }}"#,
                fx.vehicle_id, fx.parking_id
            ),
            Some(fx.client),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "VALIDATION_ERROR");
    assert!(resp["errors"][0]["extensions"]["details"]["endTime"].is_string());
    println!("[/] Test passed: inverted range reported on endTime.");
}

#[tokio::test]
async fn test_cancel_reservation_is_final() {
    println!("\n\n[+] Running test: test_cancel_reservation_is_final");
    let ctx = TestContext::new().await;
    let fx = setup(&ctx).await;

    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createReservation(input: {{
                        vehicleId: "{}",
                        parkingId: "{}",
                        startTime: "2026-09-01T10:00:00Z",
                        endTime: "2026-09-01T12:00:00Z"
                    }}) {{ id }}
                }}"#,
                fx.vehicle_id, fx.parking_id
            ),
            Some(fx.client),
        )
        .await;
    assert!(resp["errors"].is_null());
    let reservation_id = resp["data"]["createReservation"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    println!("[>] Cancelling the reservation.");
    let resp = ctx
        .exec(
            &format!(r#"mutation {{ cancelReservation(id: "{reservation_id}") {{ status }} }}"#),
            Some(fx.client),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert!(resp["errors"].is_null());
    assert_eq!(resp["data"]["cancelReservation"]["status"], "CANCELLED");

    println!("[>] Cancelling it again.");
    let resp = ctx
        .exec(
            &format!(r#"mutation {{ cancelReservation(id: "{reservation_id}") {{ status }} }}"#),
            Some(fx.client),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "CONFLICT");
    println!("[/] Test passed: a cancelled reservation stays cancelled.");
}

#[tokio::test]
async fn test_clients_cannot_book_for_others() {
    println!("\n\n[+] Running test: test_clients_cannot_book_for_others");
    let ctx = TestContext::new().await;
    let fx = setup(&ctx).await;
    let other = ctx.seed_user("other@example.com", UserRole::Client).await;

    println!("[>] Booking on behalf of another user as a client.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createReservation(input: {{
                        userId: "{}",
                        vehicleId: "{}",
                        parkingId: "{}",
                        startTime: "2026-09-01T10:00:00Z",
                        endTime: "2026-09-01T12:00:00Z"
                    }}) {{ id }}
                }}"#,
                other.id, fx.vehicle_id, fx.parking_id
            ),
            Some(fx.client),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "AUTHORIZATION_ERROR");
    println!("[/] Test passed: booking for others needs a managing role.");
}

#[tokio::test]
async fn test_entry_and_exit_events_drive_statuses() {
    println!("\n\n[+] Running test: test_entry_and_exit_events_drive_statuses");
    let ctx = TestContext::new().await;
    let fx = setup(&ctx).await;
    let valet = ctx.seed_user("valet@example.com", UserRole::Valet).await;

    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createReservation(input: {{
                        vehicleId: "{}",
                        parkingId: "{}",
                        startTime: "2026-09-01T10:00:00Z",
                        endTime: "2026-09-01T12:00:00Z"
                    }}) {{ id }}
                }}"#,
                fx.vehicle_id, fx.parking_id
            ),
            Some(fx.client),
        )
        .await;
    assert!(resp["errors"].is_null());
    let reservation_id = resp["data"]["createReservation"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    println!("[>] Scanning the car in at the gate.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createEvent(input: {{
                        eventType: ENTRY,
                        vehicleId: "{}",
                        parkingId: "{}",
                        reservationId: "{reservation_id}",
                        gate: "north",
                        qrCode: "qr-entry-1"
                    }}) {{ id eventType }}
                }}"#,
                fx.vehicle_id, fx.parking_id
            ),
            Some(valet),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert!(resp["errors"].is_null());
    assert_eq!(resp["data"]["createEvent"]["eventType"], "ENTRY");

    let resp = ctx
        .exec(
            &format!(
                r#"query {{
                    parking(id: "{}") {{ status }}
                    reservation(id: "{reservation_id}") {{ status }}
                }}"#,
                fx.parking_id
            ),
            Some(valet),
        )
        .await;
    println!("[<] Statuses after entry: {}", resp);
    assert_eq!(resp["data"]["parking"]["status"], "OCCUPIED");
    assert_eq!(resp["data"]["reservation"]["status"], "ACTIVE");

    println!("[>] Scanning the car out.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createEvent(input: {{
                        eventType: EXIT,
                        vehicleId: "{}",
                        parkingId: "{}",
                        reservationId: "{reservation_id}",
                        gate: "north",
                        qrCode: "qr-exit-1"
                    }}) {{ id }}
                }}"#,
                fx.vehicle_id, fx.parking_id
            ),
            Some(valet),
        )
        .await;
    assert!(resp["errors"].is_null());

    let resp = ctx
        .exec(
            &format!(
                r#"query {{
                    parking(id: "{}") {{ status }}
                    reservation(id: "{reservation_id}") {{ status }}
                }}"#,
                fx.parking_id
            ),
            Some(valet),
        )
        .await;
    println!("[<] Statuses after exit: {}", resp);
    assert_eq!(resp["data"]["parking"]["status"], "AVAILABLE");
    assert_eq!(resp["data"]["reservation"]["status"], "COMPLETED");
    println!("[/] Test passed: gate events move parking and reservation state.");
}

#[tokio::test]
async fn test_gate_events_reject_unrelated_reservations() {
    println!("\n\n[+] Running test: test_gate_events_reject_unrelated_reservations");
    let ctx = TestContext::new().await;
    let fx = setup(&ctx).await;
    let valet = ctx.seed_user("valet@example.com", UserRole::Valet).await;
    let reservation_id = book(&ctx, &fx).await;

    println!("[>] Creating a second parking.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createParking(input: {{
                        name: "Garage B",
                        address: "2 Main St",
                        capacity: 10,
                        pricePerHour: 5.0,
                        companyId: "{}"
                    }}) {{ id }}
                }}"#,
                fx.company_id
            ),
            Some(fx.admin),
        )
        .await;
    assert!(resp["errors"].is_null(), "createParking failed: {}", resp);
    let other_parking_id = resp["data"]["createParking"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    println!("[>] Scanning in at the wrong parking with the reservation.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createEvent(input: {{
                        eventType: ENTRY,
                        vehicleId: "{}",
                        parkingId: "{other_parking_id}",
                        reservationId: "{reservation_id}",
                        gate: "south"
                    }}) {{ id }}
                }}"#,
                fx.vehicle_id
            ),
            Some(valet),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "CONFLICT");

    println!("[>] Verifying neither record moved.");
    let resp = ctx
        .exec(
            &format!(
                r#"query {{
                    parking(id: "{other_parking_id}") {{ status }}
                    reservation(id: "{reservation_id}") {{ status }}
                }}"#
            ),
            Some(valet),
        )
        .await;
    println!("[<] Statuses: {}", resp);
    assert_eq!(resp["data"]["parking"]["status"], "AVAILABLE");
    assert_eq!(resp["data"]["reservation"]["status"], "PENDING");
    println!("[/] Test passed: a mismatched scan changes nothing.");
}

#[tokio::test]
async fn test_gate_events_reject_finished_reservations() {
    println!("\n\n[+] Running test: test_gate_events_reject_finished_reservations");
    let ctx = TestContext::new().await;
    let fx = setup(&ctx).await;
    let valet = ctx.seed_user("valet@example.com", UserRole::Valet).await;
    let reservation_id = book(&ctx, &fx).await;

    let resp = ctx
        .exec(
            &format!(r#"mutation {{ cancelReservation(id: "{reservation_id}") {{ status }} }}"#),
            Some(fx.client),
        )
        .await;
    assert!(resp["errors"].is_null());

    println!("[>] Scanning in with the cancelled reservation.");
    let resp = ctx
        .exec(
            &format!(
                r#"mutation {{
                    createEvent(input: {{
                        eventType: ENTRY,
                        vehicleId: "{}",
                        parkingId: "{}",
                        reservationId: "{reservation_id}",
                        gate: "north"
                    }}) {{ id }}
                }}"#,
                fx.vehicle_id, fx.parking_id
            ),
            Some(valet),
        )
        .await;
    println!("[<] Response: {}", resp);
    assert_eq!(error_code(&resp), "CONFLICT");

    let resp = ctx
        .exec(
            &format!(
                r#"query {{
                    parking(id: "{}") {{ status }}
                    reservation(id: "{reservation_id}") {{ status }}
                }}"#,
                fx.parking_id
            ),
            Some(valet),
        )
        .await;
    println!("[<] Statuses: {}", resp);
    assert_eq!(resp["data"]["parking"]["status"], "AVAILABLE");
    assert_eq!(resp["data"]["reservation"]["status"], "CANCELLED");
    println!("[/] Test passed: finished reservations cannot be driven by the gates.");
}
