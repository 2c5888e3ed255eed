use super::common::*;
use crate::dashboard::domain::InterviewId;
use crate::dashboard::rollup::aggregate;

fn id(raw: &str) -> InterviewId {
    InterviewId(raw.to_string())
}

#[test]
fn every_interview_gets_a_group_even_without_reports() {
    let interviews = vec![
        interview("itv-1", "Backend", "en"),
        interview("itv-2", "Support", "es"),
    ];

    let groups = aggregate(&interviews, &[], false);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[&id("itv-1")].count(), 0);
    assert_eq!(groups[&id("itv-2")].total, 0);
}

#[test]
fn reports_group_under_their_interview_in_input_order() {
    let interviews = vec![interview("itv-1", "Backend", "en")];
    let reports = vec![
        report("rpt-2", "itv-1", "Diego Alvarez"),
        report("rpt-1", "itv-1", "Asha Raman"),
    ];

    let groups = aggregate(&interviews, &reports, false);
    let ids: Vec<&str> = groups[&id("itv-1")]
        .reports
        .iter()
        .map(|report| report.report_id.as_str())
        .collect();
    assert_eq!(ids, vec!["rpt-2", "rpt-1"]);
}

#[test]
fn orphan_reports_contribute_to_no_group() {
    // itv-2 has a report but is not part of the loaded set
    let interviews = vec![interview("itv-1", "Backend", "en")];
    let reports = vec![
        report("rpt-1", "itv-1", "Asha Raman"),
        report("rpt-9", "itv-2", "Mei Lin"),
    ];

    let groups = aggregate(&interviews, &reports, false);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[&id("itv-1")].count(), 1);
    assert_eq!(groups[&id("itv-1")].total, 1);
}

#[test]
fn synthetic_exclusion_drops_reports_but_keeps_the_total() {
    let interviews = vec![interview("itv-1", "Backend", "en")];
    let reports = vec![
        report("rpt-1", "itv-1", "Asha Raman"),
        synthetic_report("rpt-2", "itv-1", "Placeholder Candidate"),
    ];

    let kept = aggregate(&interviews, &reports, false);
    assert_eq!(kept[&id("itv-1")].count(), 2);
    assert_eq!(kept[&id("itv-1")].total, 2);

    let excluded = aggregate(&interviews, &reports, true);
    assert_eq!(excluded[&id("itv-1")].count(), 1);
    assert_eq!(excluded[&id("itv-1")].total, 2);
    assert!(excluded[&id("itv-1")]
        .reports
        .iter()
        .all(|report| !report.synthetic));
}

#[test]
fn no_interviews_means_no_groups() {
    let reports = vec![report("rpt-1", "itv-1", "Asha Raman")];
    assert!(aggregate(&[], &reports, false).is_empty());
}
