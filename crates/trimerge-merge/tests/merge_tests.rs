use trimerge_merge::{
    find_conflicts, has_conflict_markers, merge_str, ConflictStyle, MarkerLabels, MergeConfig,
    MergeInput, Merger, RegionKind,
};
use trimerge_types::Side;

fn numbered(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("line {i}\n")).collect()
}

fn count_lines(text: &str, marker: &str) -> usize {
    text.lines().filter(|l| l.starts_with(marker)).count()
}

#[test]
fn identical_sides_merge_cleanly() {
    let base = "alpha\nbeta\ngamma\n";
    let side = "alpha\nBETA\ngamma\n";
    let out = merge_str(base, side, side, &MergeConfig::default()).unwrap();
    assert!(!out.has_conflicts());
    assert_eq!(out.text, side);

    let out = merge_str(base, base, base, &MergeConfig::default()).unwrap();
    assert!(!out.has_conflicts());
    assert_eq!(out.text, base);
}

#[test]
fn disjoint_edits_both_applied() {
    let base = numbered(10);
    let mut ours = base.clone();
    ours[2] = "line 3 (ours)\n".into();
    let mut theirs = base.clone();
    theirs[8] = "line 9 (theirs)\n".into();

    let (base, ours, theirs) = (base.concat(), ours.concat(), theirs.concat());
    let out = merge_str(&base, &ours, &theirs, &MergeConfig::default()).unwrap();

    assert!(!out.has_conflicts());
    assert!(out.text.contains("line 3 (ours)\n"));
    assert!(out.text.contains("line 9 (theirs)\n"));
    assert!(!out.text.contains("line 3\n"));
    assert!(!out.text.contains("line 9\n"));
    assert_eq!(out.text.lines().count(), 10);
}

#[test]
fn overlapping_edits_bracketed_in_order() {
    let base = "one\ntwo\nthree\n";
    let ours = "one\ntwo (ours)\nthree\n";
    let theirs = "one\ntwo (theirs)\nthree\n";
    let out = merge_str(base, ours, theirs, &MergeConfig::default()).unwrap();

    assert!(out.has_conflicts());
    assert_eq!(out.conflicts, 1);
    assert_eq!(count_lines(&out.text, "<<<<<<<"), 1);
    assert_eq!(count_lines(&out.text, "======="), 1);
    assert_eq!(count_lines(&out.text, ">>>>>>>"), 1);

    let start = out.text.find("<<<<<<<").unwrap();
    let ours_at = out.text.find("two (ours)").unwrap();
    let sep = out.text.find("=======").unwrap();
    let theirs_at = out.text.find("two (theirs)").unwrap();
    let end = out.text.find(">>>>>>>").unwrap();
    assert!(start < ours_at && ours_at < sep && sep < theirs_at && theirs_at < end);
}

#[test]
fn insertions_before_same_line_conflict() {
    let base = "function f(){}\n";
    let ours = "// documented by ours\nfunction f(){}\n";
    let theirs = "#[inline]\nfunction f(){}\n";
    let out = merge_str(base, ours, theirs, &MergeConfig::default()).unwrap();

    assert!(out.has_conflicts());
    assert_eq!(
        out.text,
        "<<<<<<<\n// documented by ours\n=======\n#[inline]\n>>>>>>>\nfunction f(){}\n"
    );

    let conflict = out.result.conflicts().next().unwrap();
    assert!(conflict.ancestor.is_empty());
    assert_eq!(
        out.result.region_lines(conflict, Side::Ours),
        &["// documented by ours\n"]
    );
    assert_eq!(out.result.region_lines(conflict, Side::Theirs), &["#[inline]\n"]);
}

#[test]
fn resolved_result_is_idempotent() {
    let base = "a\nb\nc\n";
    let first = merge_str(base, "A\nb\nc\n", "a\nb\nC\n", &MergeConfig::default()).unwrap();
    assert!(!first.has_conflicts());
    assert!(!has_conflict_markers(&first.text, 7));

    let resolved = first.text.clone();
    let again = merge_str(&resolved, &resolved, &resolved, &MergeConfig::default()).unwrap();
    assert!(!again.has_conflicts());
    assert_eq!(again.text, resolved);
}

#[test]
fn rendered_conflicts_are_found_by_scanner() {
    let config = MergeConfig {
        style: ConflictStyle::Diff3,
        labels: MarkerLabels::new("HEAD", "merged common ancestors", "feature"),
        ..Default::default()
    };
    let base = "x\n1\ny\n2\nz\n";
    let ours = "x\n1o\ny\n2o\nz\n";
    let theirs = "x\n1t\ny\n2t\nz\n";
    let out = merge_str(base, ours, theirs, &config).unwrap();

    assert_eq!(out.conflicts, 2);
    let blocks = find_conflicts(&out.text, config.marker_size);
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.base.is_some()));
    assert!(out.text.contains("<<<<<<< HEAD\n"));
    assert!(out.text.contains("||||||| merged common ancestors\n1\n"));
    assert!(out.text.contains(">>>>>>> feature\n"));
}

#[test]
fn deletion_against_modification_conflicts() {
    let base = "keep\ndrop me\nkeep too\n";
    let ours = "keep\nkeep too\n";
    let theirs = "keep\nchanged me\nkeep too\n";
    let out = merge_str(base, ours, theirs, &MergeConfig::default()).unwrap();
    assert!(out.has_conflicts());
    assert_eq!(out.text, "keep\n<<<<<<<\n=======\nchanged me\n>>>>>>>\nkeep too\n");
}

#[test]
fn both_deleting_same_line_is_clean() {
    let base = "a\nb\nc\n";
    let side = "a\nc\n";
    let out = merge_str(base, side, side, &MergeConfig::default()).unwrap();
    assert!(!out.has_conflicts());
    assert_eq!(out.text, side);
    let kinds: Vec<_> = out.result.regions().iter().map(|r| r.kind).collect();
    assert!(kinds.contains(&RegionKind::Both));
}

#[test]
fn missing_final_newline_preserved_on_clean_merge() {
    let out = merge_str("a\nb", "A\nb", "a\nb", &MergeConfig::default()).unwrap();
    assert_eq!(out.text, "A\nb");
}

#[test]
fn config_loaded_from_toml_drives_merge() {
    let config = MergeConfig::from_toml_str(
        r#"
        marker_size = 4
        favor = "theirs"
        "#,
    )
    .unwrap();
    let merger = Merger::new(config).unwrap();
    let input = MergeInput::new()
        .ancestor("v = 1\n")
        .ours("v = 2\n")
        .theirs("v = 3\n");
    let out = merger.merge(&input).unwrap();
    assert_eq!(out.text, "v = 3\n");
    assert!(out.has_conflicts());
    assert_eq!(out.conflicts, 0);
}
