use proptest::prelude::*;
use ttir_sync::mapping::parse_locations;

/// One generated IR line: an anchor definition, a reference, or noise.
#[derive(Debug, Clone)]
enum GenLine {
    Anchor { alias: u8, line: u32 },
    Bare { path: String },
    Reference { alias: u8 },
    Noise(String),
}

impl GenLine {
    fn render(&self) -> String {
        match self {
            GenLine::Anchor { alias, line } => {
                format!("#loc{} = loc(\"kernel.py\":{}:0)", alias, line)
            }
            GenLine::Bare { path } => format!("#loc = loc(\"{}\":1:0)", path),
            GenLine::Reference { alias } => format!("  %x = arith.addi %a, %b : i32 loc(#loc{})", alias),
            GenLine::Noise(text) => text.clone(),
        }
    }
}

fn gen_line() -> impl Strategy<Value = GenLine> {
    prop_oneof![
        (0u8..8, 1u32..200).prop_map(|(alias, line)| GenLine::Anchor { alias, line }),
        "[a-z]{1,8}\\.py".prop_map(|path| GenLine::Bare { path }),
        (0u8..12).prop_map(|alias| GenLine::Reference { alias }),
        "[a-z %=]{0,20}".prop_map(GenLine::Noise),
    ]
}

fn gen_artifact() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(gen_line(), 0..60)
        .prop_map(|lines| lines.iter().map(GenLine::render).collect())
}

proptest! {
    #[test]
    fn test_forward_and_backward_are_symmetric(lines in gen_artifact()) {
        let result = parse_locations(&lines);
        let mapping = &result.mapping;

        for (ir_line, sources) in mapping.forward_entries() {
            for source in sources {
                let hits = mapping.lookup_backward(*source).iter().filter(|l| **l == ir_line).count();
                let expected = sources.iter().filter(|s| *s == source).count();
                prop_assert_eq!(hits, expected);
            }
        }
        for (source, ir_lines) in mapping.backward_entries() {
            for ir_line in ir_lines {
                prop_assert!(mapping.lookup_forward(*ir_line).contains(&source));
            }
        }
    }

    #[test]
    fn test_parsing_is_idempotent(lines in gen_artifact()) {
        prop_assert_eq!(parse_locations(&lines), parse_locations(&lines));
    }

    #[test]
    fn test_first_bare_anchor_sets_source(lines in gen_artifact()) {
        let expected = lines
            .iter()
            .find_map(|line| {
                line.strip_prefix("#loc = loc(\"")
                    .and_then(|rest| rest.split('"').next())
                    .map(str::to_string)
            });
        prop_assert_eq!(parse_locations(&lines).source_file_path, expected);
    }

    #[test]
    fn test_unresolved_reference_adds_nothing(lines in gen_artifact(), position in 0usize..60) {
        let mut extended = lines.clone();
        let index = position.min(extended.len());
        // Generated anchors only use aliases 0..8.
        extended.insert(index, "  tt.return loc(#loc999)".to_string());

        let base = parse_locations(&lines);
        let with_unresolved = parse_locations(&extended);
        prop_assert_eq!(base.mapping.pair_count(), with_unresolved.mapping.pair_count());
        prop_assert_eq!(base.stats.unresolved + 1, with_unresolved.stats.unresolved);
    }

    #[test]
    fn test_every_reference_line_maps_to_at_most_one_source(lines in gen_artifact()) {
        let result = parse_locations(&lines);
        for (_, sources) in result.mapping.forward_entries() {
            prop_assert_eq!(sources.len(), 1);
        }
    }
}
