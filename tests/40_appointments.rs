mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn book_list_and_update_appointments() -> Result<()> {
    let app = common::TestApp::new().await?;
    let customer = app.signup("cust", "CUSTOMER").await?;
    let employee = app.signup("emp", "EMPLOYEE").await?;

    let (status, booked) = app
        .post(
            &format!("/customer/appointments?customerId={}&employeeId={}", customer, employee),
            json!({ "appointmentDate": "2024-05-02T14:30:00", "serviceType": "CHECKUP", "description": "Annual" }),
        )
        .await?;
    assert_eq!(status, StatusCode::OK, "{}", booked);
    assert_eq!(booked["status"], "SCHEDULED");
    assert_eq!(booked["customerId"], customer);
    assert_eq!(booked["employeeId"], employee);

    let (_, history) = app
        .get(&format!("/customer/appointments/history/{}", customer))
        .await?;
    assert_eq!(history.as_array().map(Vec::len), Some(1));

    let (_, others) = app
        .get(&format!("/customer/appointments/history/{}", employee))
        .await?;
    assert_eq!(others.as_array().map(Vec::len), Some(0));

    let id = booked["id"].as_i64().unwrap_or_default();
    let (status, done) = app
        .put(
            &format!("/employee/appointments/{}", id),
            json!({ "status": "COMPLETED", "treatmentDetails": "All good" }),
        )
        .await?;
    assert_eq!(status, StatusCode::OK, "{}", done);
    assert_eq!(done["status"], "COMPLETED");
    assert_eq!(done["serviceType"], "CHECKUP");
    assert_eq!(done["appointmentDate"], "2024-05-02T14:30:00");

    let (status, fetched) = app.get(&format!("/employee/appointments/{}", id)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["treatmentDetails"], "All good");

    let (_, completed) = app.get("/employee/appointments/status/COMPLETED").await?;
    assert_eq!(completed.as_array().map(Vec::len), Some(1));

    let (_, all) = app.get("/employee/appointments").await?;
    assert_eq!(all.as_array().map(Vec::len), Some(1));

    Ok(())
}

#[tokio::test]
async fn appointments_by_employee() -> Result<()> {
    let app = common::TestApp::new().await?;
    let customer = app.signup("cust", "CUSTOMER").await?;
    let ann = app.signup("ann", "EMPLOYEE").await?;
    let ben = app.signup("ben", "EMPLOYEE").await?;

    for (employee, at) in [(ann, "2024-05-02T09:00:00"), (ben, "2024-05-02T10:00:00"), (ann, "2024-06-01T09:00:00")] {
        let (status, body) = app
            .post(
                &format!("/customer/appointments?customerId={}&employeeId={}", customer, employee),
                json!({ "appointmentDate": at }),
            )
            .await?;
        assert_eq!(status, StatusCode::OK, "{}", body);
    }

    let (status, anns) = app.get(&format!("/employee/appointments/employee/{}", ann)).await?;
    assert_eq!(status, StatusCode::OK, "{}", anns);
    let dates: Vec<&str> = anns
        .as_array()
        .map(|items| items.iter().filter_map(|a| a["appointmentDate"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(dates, vec!["2024-05-02T09:00:00", "2024-06-01T09:00:00"]);

    let (_, bens) = app.get(&format!("/employee/appointments/employee/{}", ben)).await?;
    assert_eq!(bens.as_array().map(Vec::len), Some(1));

    let (_, customers) = app.get(&format!("/employee/appointments/employee/{}", customer)).await?;
    assert_eq!(customers.as_array().map(Vec::len), Some(0));

    Ok(())
}

#[tokio::test]
async fn booking_requires_known_participants() -> Result<()> {
    let app = common::TestApp::new().await?;
    let customer = app.signup("cust", "CUSTOMER").await?;

    let (status, _) = app
        .post(
            &format!("/customer/appointments?customerId={}&employeeId=55", customer),
            json!({ "appointmentDate": "2024-05-02T14:30:00" }),
        )
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post(
            &format!("/customer/appointments?customerId={}", customer),
            json!({ "appointmentDate": "2024-05-02T14:30:00" }),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/employee/appointments/3").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
