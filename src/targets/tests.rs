use super::*;
use crate::error::HttpError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use tempfile::tempdir;

fn sample_targets(len: usize) -> Vec<Target> {
    (0..len)
        .map(|index| Target::from(format!("http://host-{}.test", index)))
        .collect()
}

#[test]
fn select_returns_requested_count_of_distinct_members() -> Result<(), String> {
    let targets = sample_targets(10);
    let members: BTreeSet<&Target> = targets.iter().collect();
    let mut rng = StdRng::seed_from_u64(7);

    for count in 0..=targets.len() {
        let selected = select_targets(&targets, Some(count), &mut rng);
        if selected.len() != count {
            return Err(format!(
                "Expected {} targets, got {}",
                count,
                selected.len()
            ));
        }
        let unique: BTreeSet<&Target> = selected.iter().collect();
        if unique.len() != selected.len() {
            return Err(format!("Duplicate targets for count {}", count));
        }
        if !unique.is_subset(&members) {
            return Err(format!("Foreign target selected for count {}", count));
        }
    }
    Ok(())
}

#[test]
fn select_clamps_to_full_set() -> Result<(), String> {
    let targets = sample_targets(4);
    let expected: BTreeSet<&Target> = targets.iter().collect();
    let mut rng = StdRng::seed_from_u64(11);

    for count in [None, Some(4), Some(5), Some(1_000)] {
        let selected = select_targets(&targets, count, &mut rng);
        let unique: BTreeSet<&Target> = selected.iter().collect();
        if selected.len() != targets.len() || unique != expected {
            return Err(format!("Expected full set for {:?}", count));
        }
    }
    Ok(())
}

#[test]
fn select_shares_target_storage() -> Result<(), String> {
    let targets = sample_targets(3);
    let mut rng = StdRng::seed_from_u64(3);
    let selected = select_targets(&targets, Some(1), &mut rng);
    let picked = selected.first().ok_or("Expected one target")?;
    let original = targets
        .iter()
        .find(|candidate| *candidate == picked)
        .ok_or("Selected target missing from input")?;
    if !std::ptr::eq(picked.as_str(), original.as_str()) {
        return Err("Expected selected target to share storage".to_owned());
    }
    Ok(())
}

#[test]
fn default_targets_are_valid_and_unique() -> Result<(), String> {
    let parsed = parse_targets(DEFAULT_TARGETS).map_err(|err| err.to_string())?;
    if parsed.len() != DEFAULT_TARGETS.len() {
        return Err(format!(
            "Expected {} default targets, got {}",
            DEFAULT_TARGETS.len(),
            parsed.len()
        ));
    }
    if default_targets() != parsed {
        return Err("default_targets should match the parsed list".to_owned());
    }
    Ok(())
}

#[test]
fn parse_targets_drops_repeats() -> Result<(), String> {
    let parsed = parse_targets(["http://a.test", "http://b.test", "http://a.test"])
        .map_err(|err| err.to_string())?;
    let urls: Vec<&str> = parsed.iter().map(Target::as_str).collect();
    if urls != ["http://a.test", "http://b.test"] {
        return Err(format!("Unexpected targets: {:?}", urls));
    }
    Ok(())
}

#[test]
fn parse_targets_rejects_bad_input() -> Result<(), String> {
    if !matches!(
        parse_targets(["not a url"]),
        Err(HttpError::InvalidUrl { .. })
    ) {
        return Err("Expected InvalidUrl".to_owned());
    }
    if !matches!(
        parse_targets(["ftp://files.test"]),
        Err(HttpError::UnsupportedScheme { .. })
    ) {
        return Err("Expected UnsupportedScheme".to_owned());
    }
    if !matches!(
        parse_targets(std::iter::empty()),
        Err(HttpError::TargetListEmpty)
    ) {
        return Err("Expected TargetListEmpty".to_owned());
    }
    Ok(())
}

#[test]
fn read_targets_file_skips_comments_and_blanks() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("targets.txt");
    let content = "# staging hosts\nhttp://a.test\n\n  https://b.test  \n# end\n";
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let targets = read_targets_file(&path).map_err(|err| err.to_string())?;
    let urls: Vec<&str> = targets.iter().map(Target::as_str).collect();
    if urls != ["http://a.test", "https://b.test"] {
        return Err(format!("Unexpected targets: {:?}", urls));
    }
    Ok(())
}

#[test]
fn resolve_targets_prefers_explicit_urls() -> Result<(), String> {
    let urls = vec!["http://only.test".to_owned()];
    let targets =
        resolve_targets(&urls, Some("/nonexistent/targets.txt")).map_err(|err| err.to_string())?;
    if targets != [Target::from("http://only.test")] {
        return Err(format!("Unexpected targets: {:?}", targets));
    }

    let fallback = resolve_targets(&[], None).map_err(|err| err.to_string())?;
    if fallback.len() != DEFAULT_TARGETS.len() {
        return Err("Expected built-in targets".to_owned());
    }

    if !matches!(
        resolve_targets(&[], Some("/nonexistent/targets.txt")),
        Err(HttpError::ReadTargetsFile { .. })
    ) {
        return Err("Expected ReadTargetsFile".to_owned());
    }
    Ok(())
}
