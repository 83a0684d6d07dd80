//! Integration tests for the word list -> board -> SVG pipeline

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use scrabble_tiles::layout::{lint, Orientation, RunStatus};
use scrabble_tiles::{
    generate, parse_word_list, render_svg, render_text, render_with_config, render_with_lint,
    to_data_uri, GenerationConfig, GenerationError, Generator, LetterPoints, RenderConfig,
    RenderError, StepEvent, SvgConfig, Tile, WordList,
};

fn words(list: &[&str]) -> WordList {
    WordList::from_words(list).expect("Should be valid words")
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_crossing_pair_shares_one_cell() {
    for seed in 0..20 {
        let layout = generate(&words(&["cat", "tab"]), &GenerationConfig::default(), rng(seed))
            .expect("CAT and TAB always cross");

        assert_eq!(layout.placed_words(), vec!["CAT", "TAB"]);
        assert_eq!(layout.tiles.len(), 5);

        let seed_word = &layout.placements[0];
        assert_eq!((seed_word.x, seed_word.y), (1, 3));
        assert_eq!(seed_word.orientation, Orientation::Horizontal);

        let tab = &layout.placements[1];
        assert_eq!(tab.orientation, Orientation::Vertical);
        let (cx, cy) = tab.crossing.expect("TAB crosses the seed");
        assert_eq!(cy, 3);
        assert!(matches!(
            layout.tile_at(cx, cy),
            Some(Tile::Letter('T')) | Some(Tile::Letter('A'))
        ));
    }
}

#[test]
fn test_disjoint_words_fail_with_leftover() {
    let err = generate(&words(&["ab", "cd"]), &GenerationConfig::default(), rng(0)).unwrap_err();

    assert!(matches!(err, GenerationError::StuckNoProgress { .. }));
    assert_eq!(err.unplaced(), &["CD".to_string()]);
    let partial = err.partial_layout().expect("Failures carry the board");
    assert_eq!(render_text(partial), "AB");
}

#[test]
fn test_disjoint_words_exhaust_budget_without_stuck_detection() {
    let config = GenerationConfig::new().with_stuck_detection(false);
    let err = generate(&words(&["ab", "cd"]), &config, rng(0)).unwrap_err();

    match err {
        GenerationError::IterationBudgetExhausted {
            attempts, unplaced, ..
        } => {
            assert_eq!(attempts, 10);
            assert_eq!(unplaced, vec!["CD".to_string()]);
        }
        other => panic!("expected budget exhaustion, got {:?}", other),
    }
}

#[test]
fn test_single_word_succeeds_immediately() {
    let mut generator =
        Generator::new(words(&["hello"]), GenerationConfig::default(), rng(0)).unwrap();

    assert_eq!(generator.next(), Some(StepEvent::Finished(RunStatus::Succeeded)));
    assert_eq!(generator.next(), None);
    assert_eq!(generator.state().attempts(), 0);
    assert_eq!(render_text(&generator.snapshot()), "HELLO");
}

#[test]
fn test_blank_tile_takes_a_cell() {
    let layout = generate(&words(&["team work"]), &GenerationConfig::default(), rng(0)).unwrap();

    assert_eq!(layout.tiles.len(), 9);
    assert_eq!(layout.tile_at(4, 4), Some(Tile::Blank));
    assert_eq!(render_text(&layout), "TEAM_WORK");
}

#[test]
fn test_blank_tile_renders_without_points() {
    let layout = generate(&words(&["team work"]), &GenerationConfig::default(), rng(0)).unwrap();
    let svg = render_svg(&layout, &SvgConfig::default());

    assert_eq!(svg.matches("<g ").count(), 9);
    assert_eq!(svg.matches(r#"class="st-tile st-blank""#).count(), 1);
    assert_eq!(svg.matches(r#"class="st-letter""#).count(), 8);
    assert_eq!(svg.matches(r#"class="st-points""#).count(), 8);
}

#[test]
fn test_word_crosses_next_to_blank() {
    // OX can only hang off the O in WORK
    let list = words(&["team work", "ox"]);
    let first = render_text(&generate(&list, &GenerationConfig::default(), rng(0)).unwrap());
    insta::assert_snapshot!(first, @r"
    TEAM_WORK
    ......X..
    ");

    for seed in 1..10 {
        let layout = generate(&list, &GenerationConfig::default(), rng(seed)).unwrap();
        assert_eq!(render_text(&layout), first);
    }
}

#[test]
fn test_generator_steps_until_finished() {
    let list = words(&["family", "love", "home", "time"]);
    let mut generator = Generator::new(list, GenerationConfig::default(), rng(5)).unwrap();

    let events: Vec<StepEvent> = generator.by_ref().collect();
    let last = events.last().expect("At least one event");
    assert!(matches!(last, StepEvent::Finished(_)));
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, StepEvent::Finished(_)))
            .count(),
        1
    );

    let placed = events
        .iter()
        .filter(|e| matches!(e, StepEvent::Placed(_)))
        .count();
    assert_eq!(generator.snapshot().placements.len(), placed + 1);
}

#[test]
fn test_render_parses_and_reports_input_errors() {
    let err = render_with_config("cat\nd0g\n", RenderConfig::new().with_seed(1)).unwrap_err();
    match err {
        RenderError::Input(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].span(), &(5..6));
        }
        other => panic!("expected input error, got {:?}", other),
    }
}

#[test]
fn test_render_with_lint_clean_board() {
    let (svg, warnings) =
        render_with_lint("cat\ntop", RenderConfig::new().with_seed(9)).expect("Should render");
    assert!(svg.contains("<svg"));
    assert!(
        warnings.is_empty(),
        "Expected no warnings, got: {:?}",
        warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>()
    );
}

#[test]
fn test_custom_points_in_svg() {
    let points = LetterPoints::from_str("[points]\nC = 7\n").unwrap();
    let config = RenderConfig::new().with_seed(0).with_points(points);
    let svg = render_with_config("cat", config).unwrap();
    assert!(svg.contains(">7</text>"));
}

#[test]
fn test_data_uri_wraps_svg() {
    let svg = render_with_config("cat", RenderConfig::new().with_seed(0)).unwrap();
    let uri = to_data_uri(&svg);
    assert!(uri.starts_with("data:image/svg+xml;base64,PD94bWwg"));
}

#[test]
fn test_word_list_file_format() {
    let source = "# family words\nfamily, love\n\nhome\n";
    let list = parse_word_list(source).unwrap();
    let texts: Vec<&str> = list.iter().map(|w| w.text()).collect();
    assert_eq!(texts, vec!["FAMILY", "LOVE", "HOME"]);

    let layout = generate(&list, &GenerationConfig::default(), rng(2));
    if let Ok(layout) = layout {
        assert!(lint::check(&layout).is_empty());
    }
}

#[test]
fn test_overlaid_word_passes_lint() {
    // one row leaves CATS no choice but to run over CAT
    let config = RenderConfig::new()
        .with_seed(4)
        .with_generation(GenerationConfig::new().with_grid_size(4, 1));
    let words = parse_word_list("cat\ncats").unwrap();
    let layout = scrabble_tiles::layout_words(&words, &config).expect("CATS fits over CAT");

    assert_eq!(render_text(&layout), "CATS");
    assert_eq!(layout.placed_words(), vec!["CAT", "CATS"]);
    assert_eq!(layout.placements[1].orientation, Orientation::Horizontal);

    let (_, warnings) = render_with_lint("cat\ncats", config).unwrap();
    assert!(
        warnings.is_empty(),
        "Expected no warnings, got: {:?}",
        warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>()
    );
}
