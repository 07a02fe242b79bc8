//! End-to-end walk through create, update and delete on the seeded store.

use serde_json::{json, Value};

use crate::support::{list, seeded_server};

#[tokio::test]
async fn create_update_delete_walkthrough() {
    let (base, _) = seeded_server().await;
    let client = reqwest::Client::new();

    // Create
    let resp = client
        .post(format!("{base}/students"))
        .json(&json!({ "name": "Dana", "age": 21, "course": "Art" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    let dana_id = body["student"]["_id"].as_str().unwrap().to_string();
    assert!(!["1", "2", "3"].contains(&dana_id.as_str()));

    let students = list(&client, &base).await;
    assert_eq!(students.len(), 4);
    assert_eq!(
        students[3],
        json!({ "_id": dana_id, "name": "Dana", "age": 21, "course": "Art" })
    );

    // Update
    let resp = client
        .put(format!("{base}/students/2"))
        .json(&json!({ "age": 23 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body["student"],
        json!({ "_id": "2", "name": "Bob Smith", "age": 23, "course": "Mechanical Engineering" })
    );

    // Delete
    let resp = client
        .delete(format!("{base}/students/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Student deleted");
    assert_eq!(
        body["student"],
        json!({ "_id": "1", "name": "Alice Johnson", "age": 20, "course": "Computer Science" })
    );

    let students = list(&client, &base).await;
    assert_eq!(students.len(), 3);
    assert!(students.iter().all(|s| s["_id"] != "1"));
}

#[tokio::test]
async fn rapid_creates_get_distinct_ids() {
    let (base, _) = seeded_server().await;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for i in 0..20 {
        let resp = client
            .post(format!("{base}/students"))
            .json(&json!({ "name": format!("student {i}"), "age": 18, "course": "Art" }))
            .send()
            .await
            .unwrap();
        let body: Value = resp.json().await.unwrap();
        ids.push(body["student"]["_id"].as_str().unwrap().to_string());
    }

    let students = list(&client, &base).await;
    let mut all: Vec<&str> = students.iter().map(|s| s["_id"].as_str().unwrap()).collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 23);
    assert!(ids.iter().all(|id| all.contains(&id.as_str())));
}
