//! Transient notifier: one status line per UI region that clears itself.
//!
//! Showing a notice acquires the scope and hands back a generation number.
//! The shell schedules the release; `expire` only clears the notice if no newer
//! one has been shown in the same scope since.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeScope {
    /// Upload, dataset list, data preview and recommendations.
    General,
    Relationship,
    Threshold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "message success",
            NoticeKind::Error => "message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Notice>,
    generation: u64,
}

impl Notifier {
    /// Replaces whatever is shown and returns the generation the release
    /// timer must carry.
    pub fn show(&mut self, text: impl Into<String>, kind: NoticeKind) -> u64 {
        self.generation += 1;
        self.current = Some(Notice {
            text: text.into(),
            kind,
        });
        self.generation
    }

    /// Clears the notice if `generation` is still the latest. Returns whether
    /// anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// The notifiers of all scopes.
#[derive(Debug, Clone, Default)]
pub struct Notices {
    general: Notifier,
    relationship: Notifier,
    threshold: Notifier,
}

impl Notices {
    pub fn scope(&self, scope: NoticeScope) -> &Notifier {
        match scope {
            NoticeScope::General => &self.general,
            NoticeScope::Relationship => &self.relationship,
            NoticeScope::Threshold => &self.threshold,
        }
    }

    pub fn scope_mut(&mut self, scope: NoticeScope) -> &mut Notifier {
        match scope {
            NoticeScope::General => &mut self.general,
            NoticeScope::Relationship => &mut self.relationship,
            NoticeScope::Threshold => &mut self.threshold,
        }
    }

    pub fn current(&self, scope: NoticeScope) -> Option<&Notice> {
        self.scope(scope).current()
    }
}
