//! Lease analysis pipeline — persona prompts → provider calls → artifacts.
//!
//! DESIGN
//! ======
//! Linear product flow: generate or ingest a lease, extract key info
//! (Lease Analyst), design an automation workflow (Workflow Architect),
//! estimate business value (Value Analyst). Each stage is one prompt to
//! the text-completion provider, feeding the previous stage's output
//! forward. Prompt builders are pure functions so they can be tested
//! without a provider; the prompt wording itself is not a design concern,
//! only the data flow through it.

use tracing::info;

use crate::llm::{ProviderError, TextCompletion};

// =============================================================================
// TYPES
// =============================================================================

/// Combined output of analyzing one lease document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaseAnalysis {
    /// Structured key-info summary extracted from the lease.
    pub key_info: String,
    /// Numbered automation workflow text (input for the swimlane diagram).
    pub workflow: String,
    /// Business-value narrative for the proposed workflow.
    pub value: String,
}

// =============================================================================
// PIPELINE STAGES
// =============================================================================

/// Generate a full lease agreement from a one-line description.
///
/// # Errors
///
/// Returns a [`ProviderError`] if the provider call fails.
pub async fn generate_lease(provider: &dyn TextCompletion, description: &str) -> Result<String, ProviderError> {
    info!(description_len = description.len(), "analysis: generating lease agreement");
    provider.complete(&build_lease_prompt(description)).await
}

/// Extract key lease information from raw document text.
///
/// # Errors
///
/// Returns a [`ProviderError`] if the provider call fails.
pub async fn extract_key_info(provider: &dyn TextCompletion, document_text: &str) -> Result<String, ProviderError> {
    info!(document_len = document_text.len(), "analysis: extracting key info");
    provider.complete(&build_key_info_prompt(document_text)).await
}

/// Propose a numbered multi-system automation workflow for the lease.
///
/// # Errors
///
/// Returns a [`ProviderError`] if the provider call fails.
pub async fn generate_workflow(provider: &dyn TextCompletion, extracted_info: &str) -> Result<String, ProviderError> {
    info!("analysis: generating automation workflow");
    provider.complete(&build_workflow_prompt(extracted_info)).await
}

/// Estimate the business value of the proposed workflow.
///
/// # Errors
///
/// Returns a [`ProviderError`] if the provider call fails.
pub async fn estimate_value(
    provider: &dyn TextCompletion,
    extracted_info: &str,
    workflow_text: &str,
) -> Result<String, ProviderError> {
    info!("analysis: estimating business value");
    provider
        .complete(&build_value_prompt(extracted_info, workflow_text))
        .await
}

// =============================================================================
// END-TO-END PATHS
// =============================================================================

/// Analyze an existing lease document: key info → workflow → value.
///
/// # Errors
///
/// Returns the first [`ProviderError`] encountered; no partial results are
/// surfaced.
pub async fn analyze_document(provider: &dyn TextCompletion, document_text: &str) -> Result<LeaseAnalysis, ProviderError> {
    let key_info = extract_key_info(provider, document_text).await?;
    let workflow = generate_workflow(provider, &key_info).await?;
    let value = estimate_value(provider, &key_info, &workflow).await?;
    info!(
        key_info_len = key_info.len(),
        workflow_len = workflow.len(),
        "analysis: document pipeline complete"
    );
    Ok(LeaseAnalysis { key_info, workflow, value })
}

/// Generate a lease from a description, then analyze it. Returns the
/// generated lease text alongside the analysis.
///
/// # Errors
///
/// Returns the first [`ProviderError`] encountered.
pub async fn analyze_description(
    provider: &dyn TextCompletion,
    description: &str,
) -> Result<(String, LeaseAnalysis), ProviderError> {
    let lease_text = generate_lease(provider, description).await?;
    let analysis = analyze_document(provider, &lease_text).await?;
    Ok((lease_text, analysis))
}

// =============================================================================
// PROMPTS
// =============================================================================

pub(crate) fn build_lease_prompt(description: &str) -> String {
    format!(
        "You're a commercial real estate legal assistant. Based on this description, \
         generate a realistic lease agreement:\n\n\
         {description}\n\n\
         Format as a standard lease agreement with all the typical sections and clauses."
    )
}

pub(crate) fn build_key_info_prompt(document_text: &str) -> String {
    format!(
        "You are a Lease Analyst specializing in commercial real estate documents.\n\n\
         Analyze this lease document and extract key information:\n\
         - Property address\n\
         - Parties involved (landlord and tenant)\n\
         - Lease term and important dates\n\
         - Rent details and payment schedule\n\
         - Renewal and termination clauses\n\
         - Any key deadlines or milestones\n\n\
         Format your response as a structured summary.\n\n\
         Document:\n{document_text}"
    )
}

pub(crate) fn build_workflow_prompt(extracted_info: &str) -> String {
    format!(
        "You are a Workflow Architect specializing in commercial real estate automation.\n\n\
         Based on this lease information:\n\
         {extracted_info}\n\n\
         Design an automation workflow with 4-6 steps using tools like:\n\
         - Salesforce\n\
         - DocuSign\n\
         - Google Drive\n\
         - Slack\n\n\
         For each step, explain its purpose and how it helps automate the lease \
         management process.\n\
         Format as a numbered list with clear step titles and descriptions."
    )
}

pub(crate) fn build_value_prompt(extracted_info: &str, workflow_text: &str) -> String {
    format!(
        "You are a Value Analyst specializing in ROI of automation in commercial real estate.\n\n\
         Based on the lease information:\n\
         {extracted_info}\n\n\
         And the proposed workflow:\n\
         {workflow_text}\n\n\
         Estimate:\n\
         - Hours saved by automating manual tasks\n\
         - Risk or errors avoided through automation\n\
         - Which teams benefit most from this automation\n\n\
         Format your response as 3 bullet points."
    )
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
