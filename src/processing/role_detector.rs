//! Role detection by weighted keyword/skill presence

use crate::processing::roles::{Role, RoleTable};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const KEYWORD_WEIGHT: u32 = 2;
const SKILL_WEIGHT: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleScore {
    pub role: Role,
    pub keyword_hits: usize,
    pub skill_hits: usize,
    pub score: u32,
}

pub struct RoleDetector {
    roles: Arc<RoleTable>,
}

impl RoleDetector {
    pub fn new(roles: Arc<RoleTable>) -> Self {
        Self { roles }
    }

    /// Score for every role in table order
    pub fn scores(&self, text: &str) -> Vec<RoleScore> {
        self.roles
            .entries()
            .iter()
            .map(|entry| {
                let keyword_hits = entry.keyword_matcher.count(text);
                let skill_hits = entry.skill_matcher.count(text);
                RoleScore {
                    role: entry.profile.role,
                    keyword_hits,
                    skill_hits,
                    score: KEYWORD_WEIGHT * keyword_hits as u32 + SKILL_WEIGHT * skill_hits as u32,
                }
            })
            .collect()
    }

    /// Best matching role; the earliest role wins ties, GENERAL if nothing scores
    pub fn detect(&self, text: &str) -> Role {
        let mut best: Option<RoleScore> = None;
        for candidate in self.scores(text) {
            debug!(
                "Role {} scored {} ({} keywords, {} skills)",
                candidate.role, candidate.score, candidate.keyword_hits, candidate.skill_hits
            );
            if candidate.score == 0 {
                continue;
            }
            match &best {
                Some(current) if current.score >= candidate.score => {}
                _ => best = Some(candidate),
            }
        }

        best.map(|s| s.role).unwrap_or(Role::General)
    }
}
