use profbook_path::{AbsolutePath, PathToken, RelativePath};
use profbook_state::{ErrorKind, State};
use profbook_test_utils::{abs, sample_state};
use proptest::prelude::*;

fn arb_known_path() -> impl Strategy<Value = AbsolutePath> {
    prop_oneof![
        Just(abs("~")),
        Just(abs("~/grp-001")),
        Just(abs("~/grp-002")),
        (1..=5u32).prop_map(|n| abs(&format!("~/grp-001/stu-{n:03}"))),
        (6..=10u32).prop_map(|n| abs(&format!("~/grp-002/stu-{n:03}"))),
    ]
}

fn arb_token() -> impl Strategy<Value = PathToken> {
    prop_oneof![
        Just(PathToken::Current),
        Just(PathToken::Parent),
        (0..4u32).prop_map(|n| PathToken::Segment(format!("grp-{n:03}"))),
        (0..12u32).prop_map(|n| PathToken::Segment(format!("stu-{n:03}"))),
    ]
}

proptest! {
    #[test]
    fn prop_resolution_never_touches_tree(
        start in arb_known_path(),
        tokens in proptest::collection::vec(arb_token(), 1..6)
    ) {
        let empty = {
            let mut s = State::new();
            s.set_current_path(start.clone());
            s
        };
        let mut full = sample_state();
        full.set_current_path(start);

        let relative = RelativePath::new(tokens).unwrap();
        prop_assert_eq!(
            empty.resolve_from_current(&relative),
            full.resolve_from_current(&relative)
        );
    }

    #[test]
    fn prop_known_paths_locate(path in arb_known_path()) {
        let state = sample_state();
        prop_assert!(state.has_path(&path));
    }

    #[test]
    fn prop_views_match_depth(path in arb_known_path()) {
        let mut state = sample_state();
        let task_result = state.task_view(&path).map(|_| ());
        if path.is_root() {
            prop_assert_eq!(task_result.unwrap_err().kind(), ErrorKind::UnsupportedOperation);
        } else {
            prop_assert!(task_result.is_ok());
        }

        let child_result = state.child_view(&path).map(|_| ());
        if path.is_student_level() {
            prop_assert_eq!(child_result.unwrap_err().kind(), ErrorKind::UnsupportedOperation);
        } else {
            prop_assert!(child_result.is_ok());
        }
    }
}
