//! Rendering and delivery of calculation results.
//!
//! Nothing here feeds back into the engine: the report consumes a
//! [`CropRecord`](crate::orc::CropRecord) and its
//! [`OrcResult`](crate::orc::OrcResult), and mail dispatch is a trait the
//! hosting service implements.

pub mod mail;
pub mod report;

pub use mail::{
    is_valid_email, Attachment, DispatchReceipt, EmailRequest, MailDispatcher, MailError,
    ReportContent,
};
pub use report::{attachment_file_name, render_csv, AttachmentKind, ExportError, ReportReference};
