mod common;

use boggle_solver::{
    AdjacencyTable, Board, BoardShape, BoggleError, Boggler, CompactWordSet, Dictionary,
    ErrorKind, WordSet, BLOCKED, LOAD_ERROR_SENTINEL,
};
use common::ReferenceSolver;

fn shape(width: usize, height: usize) -> BoardShape {
    BoardShape::new(width, height).expect("supported shape")
}

#[test]
fn scores_small_board() {
    let mut words = WordSet::new();
    for w in ["cat", "cats", "at"] {
        words.add_word(w).expect("valid word");
    }
    let mut boggler = Boggler::new(&mut words, shape(2, 2)).expect("create solver");

    // "at" is a two-cell path and scores nothing.
    assert_eq!(boggler.score("ctsa").expect("score"), 2);
    assert_eq!(
        boggler.find_words("ctsa", false).expect("find words"),
        vec![vec![0, 3, 1], vec![0, 3, 1, 2], vec![3, 1]]
    );
}

#[test]
fn score_is_repeatable() {
    let mut words = WordSet::create_from_wordlist(["cat", "cats", "tsar"]);
    let mut boggler = Boggler::new(&mut words, shape(2, 2)).expect("create solver");

    assert_eq!(boggler.score("ctsa").expect("score"), 2);
    assert_eq!(boggler.score("ctsa").expect("score"), 2);
    boggler.find_words("ctsa", true).expect("find words");
    assert_eq!(boggler.score("ctsa").expect("score"), 2);
}

#[test]
fn board_without_words() {
    let mut empty = WordSet::new();
    let mut boggler = Boggler::new(&mut empty, shape(3, 3)).expect("create solver");
    assert_eq!(boggler.score("abcdefghi").expect("score"), 0);
    assert!(boggler.find_words("abcdefghi", false).expect("find").is_empty());

    let mut words = WordSet::create_from_wordlist(["zebra"]);
    let mut boggler = Boggler::new(&mut words, shape(3, 3)).expect("create solver");
    assert_eq!(boggler.score("abcdefghi").expect("score"), 0);
}

#[test]
fn qu_cell_counts_twice() {
    let mut words = WordSet::create_from_wordlist(["quit", "quite"]);
    let mut boggler = Boggler::new(&mut words, shape(2, 2)).expect("create solver");

    // "quit" spans 3 cells but 4 letters (1 point), "quite" 5 letters (2).
    assert_eq!(boggler.score("qite").expect("score"), 3);
    assert_eq!(
        boggler.find_words("qite", false).expect("find words"),
        vec![vec![0, 1, 2], vec![0, 1, 2, 3]]
    );
}

#[test]
fn qu_path_past_score_table() {
    let mut words = WordSet::create_from_wordlist(["quite"]);
    let mut boggler =
        Boggler::with_score_table(&mut words, shape(2, 2), &[0, 0, 0, 1, 7]).expect("solver");

    // Four cells, five letters: scored as the table's last entry.
    assert_eq!(boggler.score("qite").expect("score"), 7);
}

#[test]
fn rectangular_board_orientation() {
    let words = ["abe", "aef", "bcd", "dhl", "aei", "cgk", "ade", "ail", "dei"];
    let mut dict = WordSet::create_from_wordlist(words);
    let board_shape = shape(3, 4);
    let mut boggler = Boggler::new(&mut dict, board_shape).expect("create solver");

    // a b c d / e f g h / i j k l
    assert_eq!(boggler.cell(0, 3), b'd' - b'a');
    let score = boggler.score("abcdefghijkl").expect("score");
    assert_eq!(score, 6);
    assert_eq!(boggler.cell(1, 0), b'e' - b'a');
    assert_eq!(boggler.cell(2, 3), b'l' - b'a');
    assert_eq!(
        score,
        ReferenceSolver::new(&words).score(board_shape, "abcdefghijkl")
    );
}

#[test]
fn adjacency_tables() {
    let t34 = AdjacencyTable::for_shape(shape(3, 4));
    assert_eq!(t34.neighbors(0), &[1, 4, 5]);
    assert_eq!(t34.neighbors(5), &[0, 1, 2, 4, 6, 8, 9, 10]);
    assert_eq!(t34.neighbors(11), &[6, 7, 10]);

    let t23 = AdjacencyTable::for_shape(shape(2, 3));
    assert_eq!(t23.neighbors(4), &[0, 1, 2, 3, 5]);

    let t55 = AdjacencyTable::for_shape(shape(5, 5));
    assert_eq!(t55.neighbors(12), &[6, 7, 8, 11, 13, 16, 17, 18]);
    assert_eq!(t55.neighbors(24), &[18, 19, 23]);

    assert!(std::ptr::eq(t55, AdjacencyTable::for_shape(shape(5, 5))));
    assert_eq!(t55.shape(), shape(5, 5));
}

#[test]
fn multiboggle_counts_distinct_cell_sets() {
    let mut words = WordSet::create_from_wordlist(["tea"]);
    let mut boggler = Boggler::new(&mut words, shape(2, 2)).expect("create solver");

    assert_eq!(
        boggler.find_words("teae", false).expect("find words"),
        vec![vec![0, 1, 2]]
    );
    let multi = boggler.find_words("teae", true).expect("find words");
    assert_eq!(multi, vec![vec![0, 1, 2], vec![0, 3, 2]]);
    assert_eq!(boggler.find_words("teae", true).expect("find words"), multi);
}

#[test]
fn multiboggle_ignores_reordered_paths() {
    let mut words = WordSet::create_from_wordlist(["tete"]);
    let mut boggler = Boggler::new(&mut words, shape(2, 2)).expect("create solver");

    // Four paths spell "tete", all over the same four cells.
    assert_eq!(
        boggler.find_words("tete", true).expect("find words"),
        vec![vec![0, 1, 2, 3]]
    );
}

#[test]
fn blocked_cells() {
    let mut words = WordSet::create_from_wordlist(["tea"]);
    let mut boggler = Boggler::new(&mut words, shape(2, 2)).expect("create solver");

    assert_eq!(
        boggler.find_words("tea.", false).expect("find words"),
        vec![vec![0, 1, 2]]
    );
    assert_eq!(
        boggler.find_words("t.ae", false).expect("find words"),
        vec![vec![0, 3, 2]]
    );
    assert!(boggler.find_words("t..a", false).expect("find").is_empty());
    assert_eq!(boggler.board().cells()[1], BLOCKED);

    let err = boggler.score("ct.a").expect_err("blocked cell while scoring");
    assert!(
        matches!(err, BoggleError::BlockedCellNotAllowed { position: 2 }),
        "got {:?}",
        err
    );
    assert_eq!(boggler.score_or_sentinel("ct.a"), LOAD_ERROR_SENTINEL);
}

#[test]
fn rejects_malformed_boards() {
    let mut words = WordSet::create_from_wordlist(["cat"]);
    let mut boggler = Boggler::new(&mut words, shape(2, 2)).expect("create solver");

    let err = boggler.score("cat").expect_err("too short");
    assert!(
        matches!(err, BoggleError::BoardLength { expected: 4, found: 3 }),
        "got {:?}",
        err
    );
    let err = boggler.find_words("ctsab", false).expect_err("too long");
    assert!(
        matches!(err, BoggleError::BoardLength { expected: 4, found: 5 }),
        "got {:?}",
        err
    );

    let err = boggler.score("Ctsa").expect_err("uppercase");
    assert!(
        matches!(err, BoggleError::UppercaseLetter { letter: 'C', position: 0 }),
        "got {:?}",
        err
    );
    let err = boggler.score("c1sa").expect_err("digit");
    assert!(
        matches!(err, BoggleError::UnexpectedCharacter { found: '1', position: 1 }),
        "got {:?}",
        err
    );
    let err = boggler.find_words("ct a", false).expect_err("space");
    assert!(
        matches!(err, BoggleError::UnexpectedCharacter { found: ' ', position: 2 }),
        "got {:?}",
        err
    );
    assert_eq!(err.kind(), ErrorKind::Load);

    assert_eq!(boggler.score_or_sentinel("abc"), LOAD_ERROR_SENTINEL);
    assert_eq!(
        boggler.find_words_or_sentinel("abc", false),
        vec![vec![LOAD_ERROR_SENTINEL]]
    );
    assert_eq!(boggler.score_or_sentinel("ctsa"), 1);
    assert_eq!(
        boggler.find_words_or_sentinel("ctsa", false),
        vec![vec![0, 3, 1]]
    );
}

#[test]
fn rejected_board_leaves_state_untouched() {
    let mut words = WordSet::create_from_wordlist(["cat", "cats"]);
    {
        let mut boggler = Boggler::new(&mut words, shape(2, 2)).expect("create solver");
        assert_eq!(boggler.score("ctsa").expect("score"), 2);
        assert!(boggler.score("cts").is_err());
        assert!(boggler.find_words("ctsA", false).is_err());
        assert_eq!(boggler.board().to_string(), "ctsa");
    }
    // One successful search means one generation was used.
    assert_eq!(words.reset_marks(), 2);
}

#[test]
fn set_cell_then_score() {
    let mut words = WordSet::create_from_wordlist(["cat"]);
    let mut boggler = Boggler::new(&mut words, shape(3, 3)).expect("create solver");

    boggler.set_cell(0, 0, b'c' - b'a');
    boggler.set_cell(1, 1, b't' - b'a');
    assert_eq!(boggler.cell(1, 1), b't' - b'a');
    assert_eq!(boggler.board().to_string(), "caaataaaa");
    assert_eq!(boggler.score_current(), 1);
    assert_eq!(boggler.num_cells(), 9);
}

#[test]
#[should_panic(expected = "outside")]
fn set_cell_rejects_column_past_height() {
    let mut words = WordSet::new();
    let mut boggler = Boggler::new(&mut words, shape(3, 3)).expect("create solver");
    boggler.set_cell(0, 4, b'z' - b'a');
}

#[test]
#[should_panic(expected = "outside")]
fn cell_rejects_row_past_width() {
    let board = Board::new(shape(3, 4));
    board.cell(3, 0);
}

#[test]
fn compact_and_trie_find_same_words() {
    let list = ["tea", "teas", "seat", "eats", "east", "sate", "etas", "ate", "eat", "sea"];
    let mut trie = WordSet::create_from_wordlist(list);
    let mut compact = CompactWordSet::from_word_set(&trie);

    for multiboggle in [false, true] {
        let from_trie = Boggler::new(&mut trie, shape(3, 3))
            .and_then(|mut b| b.find_words("teasaetse", multiboggle))
            .expect("find words with trie");
        let from_compact = Boggler::new(&mut compact, shape(3, 3))
            .and_then(|mut b| b.find_words("teasaetse", multiboggle))
            .expect("find words with compact");
        assert!(!from_trie.is_empty());
        assert_eq!(from_trie, from_compact, "multiboggle = {}", multiboggle);
    }
}

#[test]
fn compact_and_trie_agree() {
    let list = ["tea", "teas", "seat", "eats", "east", "sate", "etas", "ate", "eat", "sea"];
    let mut trie = WordSet::create_from_wordlist(list);
    let mut compact = CompactWordSet::from_word_set(&trie);

    for board in ["teasaetse", "eatsxeats", "abcdefghi", "sssssssss"] {
        let expected = ReferenceSolver::new(&list).score(shape(3, 3), board);
        let from_trie = Boggler::new(&mut trie, shape(3, 3))
            .and_then(|mut b| b.score(board))
            .expect("score with trie");
        let from_compact = Boggler::new(&mut compact, shape(3, 3))
            .and_then(|mut b| b.score(board))
            .expect("score with compact");
        assert_eq!(from_trie, expected, "trie score for {}", board);
        assert_eq!(from_compact, expected, "compact score for {}", board);
    }
    assert_eq!(compact.size(), trie.size());
}

#[test]
fn custom_score_table() {
    let mut words = WordSet::create_from_wordlist(["cat", "cats"]);
    let mut boggler =
        Boggler::with_score_table(&mut words, shape(2, 2), &[0, 0, 0, 10, 20]).expect("solver");
    assert_eq!(boggler.score("ctsa").expect("score"), 30);
}

#[test]
fn configuration_errors() {
    let err = BoardShape::new(4, 3).expect_err("4x3 is not supported");
    assert!(
        matches!(err, BoggleError::UnsupportedShape { width: 4, height: 3 }),
        "got {:?}",
        err
    );
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(BoardShape::from_size_code(66).is_err());
    assert_eq!(BoardShape::from_size_code(45).expect("4x5").cells(), 20);
    assert_eq!(shape(3, 4).to_string(), "3x4");

    let mut words = WordSet::new();
    let err = Boggler::with_score_table(&mut words, shape(2, 2), &[0, 0, 0, 1])
        .err()
        .expect("table too short");
    assert!(
        matches!(err, BoggleError::ScoreTableTooShort { cells: 4, len: 4 }),
        "got {:?}",
        err
    );
    assert!(!err.is_load_error());
}

#[test]
fn board_parsing() {
    let board: Board = "ab.d".parse().expect("2x2 board");
    assert_eq!(board.shape(), shape(2, 2));
    assert_eq!(board.cells()[2], BLOCKED);
    assert_eq!(board.cell(1, 1), 3);
    assert_eq!(board.to_string(), "ab.d");

    let err = "abc".parse::<Board>().expect_err("no 3-cell shape");
    assert!(matches!(err, BoggleError::BoardLength { found: 3, .. }), "got {:?}", err);

    let err = Board::parse(shape(2, 2), "ab.d", false).expect_err("blocked not allowed");
    assert!(matches!(err, BoggleError::BlockedCellNotAllowed { position: 2 }));
}
