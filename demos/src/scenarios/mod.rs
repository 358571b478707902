//! One runner per demonstration; each writes its transcript to the given output.

pub mod news;
pub mod payment;
pub mod report;
