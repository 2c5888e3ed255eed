use std::collections::HashMap;

use super::domain::{Interview, InterviewId, Report};

/// Reports grouped under a single interview. `reports` honors the synthetic
/// exclusion requested at aggregation time; `total` always counts every report
/// referencing the interview, synthetic included.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRollup<'a> {
    pub total: usize,
    pub reports: Vec<&'a Report>,
}

impl<'a> ReportRollup<'a> {
    fn empty() -> Self {
        Self {
            total: 0,
            reports: Vec::new(),
        }
    }

    /// Number of reports surviving the synthetic exclusion.
    pub fn count(&self) -> usize {
        self.reports.len()
    }
}

/// Groups reports by their owning interview. Every interview in the input gets
/// a group, empty when nothing references it. Reports referencing an interview
/// outside the input set are orphans and contribute to no group. Input report
/// order is preserved within each group.
pub fn aggregate<'a>(
    interviews: &[Interview],
    reports: &'a [Report],
    exclude_synthetic: bool,
) -> HashMap<InterviewId, ReportRollup<'a>> {
    let mut groups: HashMap<InterviewId, ReportRollup<'a>> = interviews
        .iter()
        .map(|interview| (interview.interview_id.clone(), ReportRollup::empty()))
        .collect();

    for report in reports {
        if let Some(group) = groups.get_mut(&report.interview_id) {
            group.total += 1;
            if !(exclude_synthetic && report.synthetic) {
                group.reports.push(report);
            }
        }
    }

    groups
}
