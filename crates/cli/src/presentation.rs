// crates/cli/src/presentation.rs
use extls_engine::grouping::ExtensionGroup;
use std::io::{self, BufWriter, Write};

/// Render the grouped listing.
///
/// Both sort passes are plain byte-lexicographic ascending: groups by
/// extension key, members by filename. Each group block is the key line, one
/// `- <name>` line per member, then a blank line (also after the last
/// group). Zero groups produce zero bytes.
pub fn render(groups: &[ExtensionGroup], out: &mut impl Write) -> io::Result<()> {
    let mut groups: Vec<ExtensionGroup> = groups.to_vec();
    groups.sort_by(|a, b| a.extension.cmp(&b.extension));

    for group in &mut groups {
        group.members.sort_unstable();
        writeln!(out, "{}:", group.extension)?;
        for member in &group.members {
            writeln!(out, "- {member}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render to stdout through a buffered, locked writer.
pub fn print_groups(groups: &[ExtensionGroup]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(groups, &mut out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(extension: &str, members: &[&str]) -> ExtensionGroup {
        ExtensionGroup {
            extension: extension.into(),
            members: members.iter().map(ToString::to_string).collect(),
        }
    }

    fn rendered(groups: &[ExtensionGroup]) -> String {
        let mut buf = Vec::new();
        render(groups, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_sorts_groups_and_members() {
        let groups = vec![
            group("txt", &["notes.txt", "a.txt"]),
            group("noext", &["readme"]),
        ];
        assert_eq!(
            rendered(&groups),
            "noext:\n- readme\n\ntxt:\n- a.txt\n- notes.txt\n\n"
        );
    }

    #[test]
    fn test_render_trailing_blank_line_after_last_group() {
        let groups = vec![group("rs", &["main.rs"])];
        assert_eq!(rendered(&groups), "rs:\n- main.rs\n\n");
    }

    #[test]
    fn test_render_empty_key_group_sorts_first() {
        let groups = vec![group("txt", &["a.txt"]), group("", &["trailing."])];
        assert_eq!(rendered(&groups), ":\n- trailing.\n\ntxt:\n- a.txt\n\n");
    }

    #[test]
    fn test_render_no_groups_is_silent() {
        assert_eq!(rendered(&[]), "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let groups = vec![group("sh", &["b.sh", "a.sh"]), group("png", &["p.png"])];
        assert_eq!(rendered(&groups), rendered(&groups));
    }
}
