//! Problem report flows: protocol allocation under concurrency, the status
//! workflow and attachment limits.

use crate::common::{self, fixtures, validation_error_name};
use chrono::{Datelike, Utc};
use recycling_collection::domain::ProblemReport;
use recycling_collection::domain::value_objects::{
    ProblemDescription, ProblemProtocol, ProblemType,
};
use recycling_collection::service::Page;
use recycling_collection::{RecyclingError, ServiceConfig};

#[tokio::test]
async fn test_filing_produces_pending_report() {
    let service = common::service();
    let report = service
        .file_problem_report(fixtures::problem_report_input(&["https://img.example.com/a.jpg"]))
        .await
        .unwrap();

    assert_eq!(report.status, "PENDING");
    assert_eq!(report.attachments, ["https://img.example.com/a.jpg"]);
    assert_eq!(report.reporter_email.as_deref(), Some("carlos@example.com"));
    assert_eq!(
        report.address.as_ref().map(|a| a.formatted.as_str()),
        Some("Rua Direita, 250, CEP 01002-000")
    );
    assert_eq!(report.created_at, report.updated_at);
}

/// Test the sequence continues from the highest protocol of the current year
#[tokio::test]
async fn test_sequence_continues_after_existing_reports() {
    let service = common::service();
    let year = Utc::now().year();

    // Seed a report from a previous year and one far into the current year
    for protocol in [
        ProblemProtocol::generate(year - 1, 900).unwrap(),
        ProblemProtocol::generate(year, 41).unwrap(),
    ] {
        let report = ProblemReport::file(
            protocol,
            ProblemType::new("Entulho").unwrap(),
            ProblemDescription::new("Entulho deixado na calçada").unwrap(),
        );
        service.repository().save(&report).await.unwrap();
    }

    let report = service
        .file_problem_report(fixtures::problem_report_input(&[]))
        .await
        .unwrap();
    assert_eq!(report.protocol, format!("PR-{}-0042", year));
}

#[tokio::test]
async fn test_concurrent_filings_allocate_unique_protocols() {
    let service = common::service();

    let filings = (0..20).map(|_| {
        let service = service.clone();
        async move {
            service
                .file_problem_report(fixtures::problem_report_input(&[]))
                .await
        }
    });
    let results = futures::future::join_all(filings).await;

    let mut sequences: Vec<u32> = results
        .into_iter()
        .map(|result| {
            ProblemProtocol::new(result.unwrap().protocol)
                .unwrap()
                .sequence()
        })
        .collect();
    sequences.sort_unstable();
    assert_eq!(sequences, (1..=20).collect::<Vec<u32>>());
}

#[tokio::test]
async fn test_full_status_workflow() {
    let service = common::service();
    let report = service
        .file_problem_report(fixtures::problem_report_input(&[]))
        .await
        .unwrap();

    let in_analysis = service
        .update_problem_status(&report.id, "IN_ANALYSIS")
        .await
        .unwrap();
    assert_eq!(in_analysis.status_label, "Em análise");
    assert!(in_analysis.updated_at >= report.updated_at);

    let resolved = service
        .update_problem_status(&report.id, "resolved")
        .await
        .unwrap();
    assert_eq!(resolved.status, "RESOLVED");

    let error = service
        .update_problem_status(&report.id, "PENDING")
        .await
        .unwrap_err();
    match &error {
        RecyclingError::InvalidStatusTransition { from, to } => {
            assert_eq!(from, "RESOLVED");
            assert_eq!(to, "PENDING");
        }
        other => panic!("Expected invalid transition, got {:?}", other),
    }

    let error = service
        .update_problem_status(&report.id, "ARCHIVED")
        .await
        .unwrap_err();
    assert_eq!(validation_error_name(&error), "InvalidProblemStatusError");
}

#[tokio::test]
async fn test_attachment_limit_applies_to_filing() {
    let service = common::service_with(ServiceConfig::default().with_max_attachments(1));

    let error = service
        .file_problem_report(fixtures::problem_report_input(&[
            "https://img.example.com/a.jpg",
            "https://img.example.com/b.jpg",
        ]))
        .await
        .unwrap_err();
    assert_eq!(validation_error_name(&error), "InvalidProblemAttachmentsError");

    let error = service
        .file_problem_report(fixtures::problem_report_input(&["bad,url"]))
        .await
        .unwrap_err();
    assert_eq!(validation_error_name(&error), "InvalidProblemAttachmentsError");
}

#[tokio::test]
async fn test_lookup_list_and_delete() {
    let service = common::service();
    let first = service
        .file_problem_report(fixtures::problem_report_input(&[]))
        .await
        .unwrap();
    service
        .file_problem_report(fixtures::problem_report_input(&[]))
        .await
        .unwrap();

    let found = service
        .find_problem_report_by_protocol(&format!(" {} ", first.protocol))
        .await
        .unwrap();
    assert_eq!(found, first);

    let page = service.list_problem_reports(Page::first(10)).await.unwrap();
    assert_eq!(page.total, 2);

    service.delete_problem_report(&first.id).await.unwrap();
    let error = service.get_problem_report(&first.id).await.unwrap_err();
    assert_eq!(error.status_code(), 404);
    assert_eq!(error.to_string(), format!("ProblemReport not found: {}", first.id));
}
