//! End-to-end integration tests over real config fixtures
//!
//! Exercises the complete flow: config loading -> qualifying -> atomic write.

use pretty_assertions::assert_eq;
use qualia_blocks::{Qualifier, parse_blocks};
use qualia_fs::{QualiaConfig, io};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/configs")
        .join(name)
}

fn qualifier_from(config: &str) -> Qualifier {
    let config = QualiaConfig::load(&fixture(config)).unwrap();
    Qualifier::new(config.qualities)
}

#[test]
fn test_bashrc_with_work_config() {
    let input = io::read_text(&fixture("bashrc.in")).unwrap();
    let expected = io::read_text(&fixture("bashrc.work.expected")).unwrap();

    let qualifier = qualifier_from("work.toml");
    assert_eq!(qualifier.qualify_str(&input), expected);
}

#[test]
fn test_gitconfig_with_home_config() {
    let input = io::read_text(&fixture("gitconfig.in")).unwrap();
    let expected = io::read_text(&fixture("gitconfig.home.expected")).unwrap();

    let qualifier = qualifier_from("home.yaml");
    assert_eq!(qualifier.qualify_str(&input), expected);
}

#[test]
fn test_switching_qualities_round_trips() {
    let input = io::read_text(&fixture("gitconfig.in")).unwrap();

    let home = qualifier_from("home.yaml").qualify_str(&input);
    let back_to_work = Qualifier::new(["work"]).qualify_str(&home);
    assert_eq!(back_to_work, input);
}

#[test]
fn test_qualified_blocks_match_qualities() {
    let input = io::read_text(&fixture("bashrc.in")).unwrap();
    let qualifier = qualifier_from("work.toml");
    let output = qualifier.qualify_str(&input);

    let blocks = parse_blocks(&output);
    assert_eq!(blocks.len(), 3);
    for block in blocks {
        assert_eq!(
            block.commented,
            !qualifier.is_active(&block.marker.tag),
            "block at line {} is out of sync",
            block.start_line
        );
    }
}

#[test]
fn test_rewrite_in_place_is_stable() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".bashrc");
    fs::copy(fixture("bashrc.in"), &path).unwrap();

    let qualifier = qualifier_from("work.toml");
    for _ in 0..2 {
        let text = io::read_text(&path).unwrap();
        io::write_text(&path, &qualifier.qualify_str(&text)).unwrap();
    }

    let expected = io::read_text(&fixture("bashrc.work.expected")).unwrap();
    assert_eq!(io::read_text(&path).unwrap(), expected);
}

#[test]
fn test_line_count_is_preserved() {
    let input = io::read_text(&fixture("bashrc.in")).unwrap();
    for qualities in [vec![], vec!["work"], vec!["home"], vec!["work", "home"]] {
        let output = Qualifier::new(qualities).qualify_str(&input);
        assert_eq!(output.lines().count(), input.lines().count());
    }
}
