//! Input list parsing tests (blank lines, comments, trimming, case).

use std::io::Write;

use domain_verdict::parse_domain_lines;

#[test]
fn skips_comments_and_blank_lines() {
    let input = "# bulk list export\n\nexample.com\n   \n# trailing note\nother.org\n";
    assert_eq!(parse_domain_lines(input), vec!["example.com", "other.org"]);
}

#[test]
fn trims_and_lowercases_entries() {
    let input = "  Example.COM  \n\tMAIL.example.org\n";
    assert_eq!(
        parse_domain_lines(input),
        vec!["example.com", "mail.example.org"]
    );
}

#[test]
fn handles_crlf_line_endings() {
    let input = "example.com\r\nother.org\r\n";
    assert_eq!(parse_domain_lines(input), vec!["example.com", "other.org"]);
}

#[test]
fn parses_round_trip_through_a_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "# header").unwrap();
    writeln!(file, "first.example.com").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "second.example.com").unwrap();

    let contents = std::fs::read_to_string(file.path()).expect("read back");
    assert_eq!(
        parse_domain_lines(&contents),
        vec!["first.example.com", "second.example.com"]
    );
}

#[test]
fn keeps_syntactically_bad_lines_for_the_engine_to_reject() {
    // Format validation happens per-domain in the engine, so bad entries
    // still get a row instead of being dropped at parse time.
    let input = "good.example.com\nnot a domain\n";
    assert_eq!(
        parse_domain_lines(input),
        vec!["good.example.com", "not a domain"]
    );
}
