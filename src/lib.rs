//! CRE Orchestrator — lease analysis and workflow automation planning.
//!
//! Turns a lease document (or a one-line lease description) into an
//! LLM-extracted key-info summary, a proposed multi-system automation
//! workflow, and a business-value narrative, then renders the workflow as
//! a swimlane diagram grouping steps by the external system each step
//! touches (Salesforce, DocuSign, Google Drive, Slack, Email).
//!
//! The presentation layer is out of scope: callers feed text in and get
//! text and diagram artifacts back.

pub mod analysis;
pub mod extract;
pub mod llm;
pub mod swimlane;
