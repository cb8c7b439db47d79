// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_paste_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic*, ~~old~~ and `code`.\n\n- Bullet point\n- [x] Done item\n1. Numbered\n\n> A quote line\n> with a second line\n\n| Name | Value |\n|------|-------|\n| a | [link](https://example.com) |\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n---\n";
    base.repeat(size)
}

/// Worst case for overlap resolution: many candidates on one line.
#[allow(dead_code)]
pub fn generate_marker_heavy_line(pairs: usize) -> String {
    "*a **b ~~c `d".repeat(pairs)
}
