//! JSON shapes exchanged with the dashboard and the datastore

use paneboard_domain::{
    parse_sender, ExtractedFields, Extraction, ExtractionStrategy, JobStatus, ParsedEmail,
    RawEmail, RequestType, ScheduleJobRequest, ScheduledJob, Urgency,
};

fn sample_extraction() -> Extraction {
    Extraction {
        fields: ExtractedFields {
            customer_name: Some("Jane Doe".into()),
            phone: Some("555-123-4567".into()),
            email: Some("jane@example.com".into()),
            address: Some("12 Oak Street".into()),
            service: Some("window cleaning".into()),
            requested_date: Some("May 10".into()),
            needs_estimate: true,
            ..ExtractedFields::default()
        },
        urgency: Urgency::High,
        request_type: RequestType::QuoteRequest,
        confidence: 1.0,
        strategy: ExtractionStrategy::Rules,
    }
}

#[test]
fn parsed_email_flattens_rule_view() {
    let extraction = sample_extraction();
    let parsed = ParsedEmail {
        fields: extraction.rule_view(),
        urgency: extraction.urgency,
        request_type: extraction.request_type,
        confidence: extraction.confidence,
        subject: "Quote for windows".into(),
        sender: "\"Jane Doe\" <jane@example.com>".into(),
        sender_email: Some("jane@example.com".into()),
        raw_content: "body".into(),
    };

    let json = serde_json::to_value(&parsed).unwrap();

    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["requestedDate"], "May 10");
    assert_eq!(json["needsEstimate"], true);
    assert_eq!(json["urgency"], "High");
    assert_eq!(json["requestType"], "Quote Request");
    assert_eq!(json["senderEmail"], "jane@example.com");
}

#[test]
fn llm_view_carries_confidence_and_preferred_date() {
    let json = serde_json::to_value(sample_extraction().llm_view()).unwrap();

    assert_eq!(json["customerName"], "Jane Doe");
    assert_eq!(json["preferredDate"], "May 10");
    assert_eq!(json["alternativeDates"], serde_json::json!([]));
    assert!(json["notes"].is_null());
    assert_eq!(json["confidence"], 1.0);
}

#[test]
fn raw_email_feeds_extraction_request_with_headers() {
    let email: RawEmail = serde_json::from_str(
        r#"{"id":"abc","subject":"Need cleaning","from":"Bob <bob@site.com>","body":"Hello"}"#,
    )
    .unwrap();

    let request = email.to_extraction_request();
    assert_eq!(request.subject(), "Need cleaning");
    assert_eq!(request.from(), Some("Bob <bob@site.com>"));

    let sender = parse_sender(request.from().unwrap());
    assert_eq!(sender.display_name.as_deref(), Some("Bob"));
}

#[test]
fn schedule_request_tolerates_missing_fields() {
    let request: ScheduleJobRequest = serde_json::from_str(r#"{"jobRequestId":"r1"}"#).unwrap();

    assert_eq!(request.job_request_id, "r1");
    assert!(request.scheduled_date.is_empty());
    assert!(request.estimated_duration <= 0.0);
    assert_eq!(request.status, None);
}

#[test]
fn scheduled_job_row_round_trips_from_datastore() {
    let row = r#"{
        "id": "sj-1",
        "job_request_id": "r1",
        "scheduled_date": "2025-05-05",
        "scheduled_time": "09:30",
        "estimated_duration": 2.5,
        "assigned_staff": "crew@example.com",
        "calendar_event_id": "evt1",
        "status": "scheduled",
        "job_details": null,
        "notes": null,
        "created_at": "2025-05-01T12:00:00Z"
    }"#;

    let job: ScheduledJob = serde_json::from_str(row).unwrap();
    assert_eq!(job.status, JobStatus::Scheduled);
    assert_eq!(job.scheduled_date.to_string(), "2025-05-05");
    assert!(job.updated_at.is_none());
}
