//! Window blinds.

use crate::capability::ShadeControl;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blinds;

impl ShadeControl for Blinds {
    fn open(&self) -> String {
        "Blinds opened".to_string()
    }

    fn close(&self) -> String {
        "Blinds closed".to_string()
    }
}
