// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_transcription(lines: usize) -> String {
    let mut markup = String::from("<ab>\n");
    for n in 1..=lines {
        markup.push_str(&format!(
            "  <lb n=\"{n}\"/><persName type=\"royal\">Krb<supplied reason=\"lost\">ʾl</supplied></persName> <gap unit=\"character\" reason=\"lost\" quantity=\"4\"/> bn <placeName>Mr<lb n=\"{n}\" break=\"no\"/>yb</placeName>\n"
        ));
    }
    markup.push_str("</ab>\n");
    markup
}

#[allow(dead_code)]
pub fn generate_translation(lines: usize) -> String {
    (1..=lines)
        .map(|n| format!("line {n} of the translation"))
        .collect::<Vec<_>>()
        .join("\n")
}
