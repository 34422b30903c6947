//! End-to-end HTTP flow tests. These expect a locally running server with a
//! migrated database (`cargo run` with DATABASE_URL set), so they are
//! ignored by default.

mod unit;

const BASE_URL: &str = "http://127.0.0.1:8000";

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn edit_form_round_trip() {
    let client = reqwest::Client::new();

    // Create a note through the form endpoint; the client follows the
    // redirect to the detail page.
    let created = client
        .post(format!("{}/notes/new", BASE_URL))
        .form(&[
            ("title", "Grocery list"),
            ("content", "The grocery list for this week"),
        ])
        .send()
        .await
        .unwrap();
    assert!(created.status().is_success());
    let note_url = created.url().to_string();

    // The edit form is pre-filled with the stored values.
    let edit_page = client
        .get(format!("{}/edit", note_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(edit_page.contains("Grocery list"));

    // A valid update redirects back to the detail page with the new content.
    let updated = client
        .post(format!("{}/edit", note_url))
        .form(&[
            ("title", "Grocery list"),
            ("content", "Updated grocery items for the list"),
        ])
        .send()
        .await
        .unwrap();
    assert!(updated.status().is_success());
    assert_eq!(updated.url().to_string(), note_url);
    let page = updated.text().await.unwrap();
    assert!(page.contains("Updated grocery items"));
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn invalid_submission_rerenders_with_errors() {
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{}/notes/new", BASE_URL))
        .form(&[("title", "Packing"), ("content", "Packing for the trip")])
        .send()
        .await
        .unwrap();
    let note_url = created.url().to_string();

    // A blank title comes back as a 422 with the field error and the
    // submitted content preserved in the form.
    let response = client
        .post(format!("{}/edit", note_url))
        .form(&[("title", ""), ("content", "Still packing for the trip")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.unwrap();
    assert!(body.contains("Title is required"));
    assert!(body.contains("Still packing for the trip"));
}

#[tokio::test]
#[ignore = "requires a running server and database"]
async fn unknown_note_renders_error_page() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!(
            "{}/notes/00000000-0000-0000-0000-000000000000/edit",
            BASE_URL
        ))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().contains("Note not found"));
}
