use super::*;

// =============================================================
// Static data shape
// =============================================================

#[test]
fn profile_has_contact_details() {
    let p = profile();
    assert_eq!(p.email, "bhargavsunil2166@gmail.com");
    assert!(p.github.starts_with("https://"));
    assert!(p.linkedin.starts_with("https://"));
}

#[test]
fn skills_list_is_nonempty_and_ordered() {
    let s = skills();
    assert_eq!(s.len(), 13);
    assert_eq!(s[0], "React.js");
    assert_eq!(s[12], "Responsive Web Design");
}

#[test]
fn projects_have_unique_ids() {
    let list = projects();
    assert_eq!(list.len(), 4);
    for (i, a) in list.iter().enumerate() {
        for b in &list[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn source_only_project_has_no_demo() {
    let list = projects();
    let backend = list
        .iter()
        .find(|p| p.title == "Multivendor E-Commerce Backend")
        .unwrap();
    assert!(backend.demo.is_none());
}

// =============================================================
// filter_projects
// =============================================================

#[test]
fn empty_query_matches_all() {
    let list = projects();
    let filtered = filter_projects(&list, "");
    assert_eq!(filtered, list);
}

#[test]
fn filter_is_subset_preserving_order() {
    let list = projects();
    let filtered = filter_projects(&list, "react");
    assert!(!filtered.is_empty());
    let mut last_index = 0;
    for p in &filtered {
        let index = list.iter().position(|q| q.id == p.id).unwrap();
        assert!(index >= last_index);
        last_index = index;
    }
}

#[test]
fn filter_matches_title_case_insensitively() {
    let list = projects();
    let filtered = filter_projects(&list, "TASK MANAGEMENT");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Task Management System");
}

#[test]
fn gemini_query_matches_the_ai_code_reviewer() {
    let list = projects();
    let filtered = filter_projects(&list, "gemini");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "AI Code Reviewer");
}

#[test]
fn sqlite_query_matches_both_sqlite_projects() {
    let list = projects();
    let filtered = filter_projects(&list, "sqlite");
    let titles: Vec<&str> = filtered.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Task Management System", "JobSearch Platform"]);
}

#[test]
fn unmatched_query_returns_empty() {
    let list = projects();
    assert!(filter_projects(&list, "cobol").is_empty());
}

#[test]
fn every_match_contains_the_query() {
    let list = projects();
    for query in ["node", "rest", "router", "markdown"] {
        for p in filter_projects(&list, query) {
            let haystack = format!("{} {}", p.title, p.tags.join(" ")).to_lowercase();
            assert!(haystack.contains(query));
        }
    }
}
