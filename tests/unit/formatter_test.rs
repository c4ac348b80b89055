use pretty_assertions::assert_eq;
use svglist::{FilenameCollection, JsonListFormatter};

fn collection(names: &[&str]) -> FilenameCollection {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_sorted_pretty_output() {
    let names = collection(&["b.svg", "a.svg"]);
    let output = JsonListFormatter::default().render(&names).unwrap();
    assert_eq!(output, "[\n  \"a.svg\",\n  \"b.svg\"\n]");
}

#[test]
fn test_output_is_valid_json() {
    let names = collection(&["quote\".svg", "back\\slash.svg", "ünï.svg"]);
    let output = JsonListFormatter::new(4, true).render(&names).unwrap();

    let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, names.names());
    assert!(output.is_ascii());
}

#[test]
fn test_render_is_deterministic() {
    let formatter = JsonListFormatter::default();
    let first = formatter.render(&collection(&["c.svg", "a.svg", "b.svg"])).unwrap();
    let second = formatter.render(&collection(&["b.svg", "c.svg", "a.svg"])).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_four_space_indent() {
    let output = JsonListFormatter::new(4, false)
        .render(&collection(&["a.svg"]))
        .unwrap();
    assert_eq!(output, "[\n    \"a.svg\"\n]");
}
