use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::{cmd::Cmd, msg::system::SystemMsg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A dismissible message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub notice: Option<Notice>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::ShowInfo(text) => {
                self.notice = Some(Notice {
                    kind: NoticeKind::Info,
                    text,
                });
                vec![Cmd::RequestRender]
            }

            SystemMsg::ShowError(text) => {
                self.notice = Some(Notice {
                    kind: NoticeKind::Error,
                    text,
                });
                vec![Cmd::RequestRender]
            }

            SystemMsg::DismissNotice => {
                if self.notice.take().is_some() {
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }
        }
    }
}
