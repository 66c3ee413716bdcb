//! Problem report use-cases: filing with protocol allocation, lookup and the
//! status workflow.

use super::RecyclingService;
use super::dto::{AddressInput, FileProblemReportInput, Page, PageOutput, ProblemReportOutput};
use crate::domain::ProblemReport;
use crate::domain::value_objects::{
    Email, ProblemAttachments, ProblemDescription, ProblemProtocol, ProblemStatus, ProblemType,
};
use crate::error::{RecyclingError, RecyclingResult, ValidationError};
use crate::storage::StorageProvider;
use chrono::{Datelike, Utc};
use log::{debug, info};

impl<S: StorageProvider> RecyclingService<S> {
    /// File a new report in the `PENDING` state.
    ///
    /// The protocol is `PR-<year>-<sequence>`, where the sequence restarts at
    /// `0001` every year. Allocation is serialized within this service.
    pub async fn file_problem_report(
        &self,
        input: FileProblemReportInput,
    ) -> RecyclingResult<ProblemReportOutput> {
        let problem_type = ProblemType::new(input.problem_type)?;
        let description = ProblemDescription::new(input.description)?;
        let attachments = ProblemAttachments::new(&input.attachments)?;
        self.check_attachment_limit(attachments.len())?;
        let address = input.address.map(AddressInput::build).transpose()?;
        let reporter_email = input.reporter_email.map(Email::new).transpose()?;

        let _guard = self.locks.protocol.lock().await;
        let protocol = self.next_protocol(Utc::now().year()).await?;

        let mut report = ProblemReport::file(protocol, problem_type, description);
        report.attachments = attachments;
        report.address = address;
        report.reporter_email = reporter_email;

        info!(
            "Filing problem report {} ({}): {}",
            report.protocol, report.id, report.problem_type
        );
        self.repository.save(&report).await?;
        Ok(ProblemReportOutput::from(&report))
    }

    async fn next_protocol(&self, year: i32) -> RecyclingResult<ProblemProtocol> {
        let reports: Vec<ProblemReport> = self.repository.list_all().await?;
        let last = reports
            .iter()
            .map(|report| &report.protocol)
            .filter(|protocol| protocol.year() == year)
            .map(ProblemProtocol::sequence)
            .max()
            .unwrap_or(0);

        debug!("Last protocol sequence for {}: {}", year, last);
        Ok(ProblemProtocol::generate(year, last + 1)?)
    }

    fn check_attachment_limit(&self, count: usize) -> RecyclingResult<()> {
        if count > self.config.max_attachments {
            return Err(ValidationError::problem_attachments(format!(
                "A report may carry at most {} attachments, got {}",
                self.config.max_attachments, count
            ))
            .into());
        }
        Ok(())
    }

    pub async fn get_problem_report(&self, id: &str) -> RecyclingResult<ProblemReportOutput> {
        let report: ProblemReport = self.repository.get(id).await?;
        Ok(ProblemReportOutput::from(&report))
    }

    /// Look up a report by its protocol, e.g. `PR-2026-0042`.
    pub async fn find_problem_report_by_protocol(
        &self,
        protocol: &str,
    ) -> RecyclingResult<ProblemReportOutput> {
        let protocol = ProblemProtocol::new(protocol)?;
        let reports: Vec<ProblemReport> = self
            .repository
            .find_by("protocol", protocol.as_str())
            .await?;

        reports
            .first()
            .map(ProblemReportOutput::from)
            .ok_or_else(|| RecyclingError::not_found("ProblemReport", protocol.as_str()))
    }

    pub async fn list_problem_reports(
        &self,
        page: Page,
    ) -> RecyclingResult<PageOutput<ProblemReportOutput>> {
        self.list_page::<ProblemReport, _>(page).await
    }

    /// Reports currently in `status`, oldest first.
    pub async fn problem_reports_with_status(
        &self,
        status: &str,
    ) -> RecyclingResult<Vec<ProblemReportOutput>> {
        let status = ProblemStatus::new(status)?;
        let mut reports: Vec<ProblemReport> =
            self.repository.find_by("status", status.as_str()).await?;
        reports.sort_by(|a, b| a.protocol.cmp(&b.protocol));
        Ok(reports.iter().map(ProblemReportOutput::from).collect())
    }

    /// Move a report to a new status.
    ///
    /// Setting the current status again is a no-op. When transitions are
    /// enforced, only `PENDING -> IN_ANALYSIS -> {RESOLVED, REJECTED}` is
    /// accepted.
    pub async fn update_problem_status(
        &self,
        id: &str,
        status: &str,
    ) -> RecyclingResult<ProblemReportOutput> {
        let next = ProblemStatus::new(status)?;

        let _guard = self.locks.problem_report.lock().await;
        let mut report: ProblemReport = self.repository.get(id).await?;

        if report.status == next {
            debug!("Problem report {} already {}", report.protocol, next);
            return Ok(ProblemReportOutput::from(&report));
        }
        if self.config.enforce_status_transitions && !report.status.can_transition_to(next) {
            return Err(RecyclingError::InvalidStatusTransition {
                from: report.status.to_string(),
                to: next.to_string(),
            });
        }

        info!(
            "Problem report {}: {} -> {}",
            report.protocol, report.status, next
        );
        report.status = next;
        report.touch();
        self.repository.save(&report).await?;
        Ok(ProblemReportOutput::from(&report))
    }

    /// Append attachments, keeping the total within the configured limit.
    pub async fn add_problem_attachments(
        &self,
        id: &str,
        urls: Vec<String>,
    ) -> RecyclingResult<ProblemReportOutput> {
        let _guard = self.locks.problem_report.lock().await;
        let mut report: ProblemReport = self.repository.get(id).await?;
        let attachments = report.attachments.with_added(&urls)?;
        self.check_attachment_limit(attachments.len())?;

        debug!(
            "Problem report {} now has {} attachment(s)",
            report.protocol,
            attachments.len()
        );
        report.attachments = attachments;
        report.touch();
        self.repository.save(&report).await?;
        Ok(ProblemReportOutput::from(&report))
    }

    pub async fn delete_problem_report(&self, id: &str) -> RecyclingResult<()> {
        self.delete_existing::<ProblemReport>(id).await
    }
}
