use facetstud_core::{FacetEngine, GroupConfig};
use serde_json::{json, Value};

fn people() -> Vec<Value> {
    vec![
        json!({"name": "Joe", "age": 17, "height": 125}),
        json!({"name": "Bob", "age": 17, "height": 221}),
        json!({"name": "Tom", "age": 35, "height": 225}),
        json!({"name": "Tom", "age": 38, "height": 185}),
    ]
}

fn setup(configs: &[GroupConfig]) -> FacetEngine<Value> {
    let mut engine = FacetEngine::new();
    engine.init_groups(configs).unwrap();
    engine.bind_data_source(people());
    engine
}

fn flat() -> Vec<GroupConfig> {
    GroupConfig::flat(["name", "age", "height"])
}

fn tree() -> Vec<GroupConfig> {
    GroupConfig::chain(["name", "age", "height"])
}

fn options(engine: &FacetEngine<Value>, group: &str) -> Vec<Value> {
    engine.groups()[group].get()
}

mod flat_groups {
    use super::*;

    #[test]
    fn returns_filtered_result() {
        let mut engine = setup(&flat());

        engine.filter_by_group("name", ["Tom"]);

        assert_eq!(
            engine.result().get(),
            vec![
                json!({"name": "Tom", "age": 35, "height": 225}),
                json!({"name": "Tom", "age": 38, "height": 185}),
            ]
        );
    }

    #[test]
    fn returns_result_on_each_filter_by_group() {
        let mut engine = setup(&flat());

        engine.filter_by_group("name", ["Tom"]);
        assert_eq!(engine.result().get().len(), 2);

        engine.filter_by_group("height", ["185"]);
        assert_eq!(
            engine.result().get(),
            vec![json!({"name": "Tom", "age": 38, "height": 185})]
        );
    }

    #[test]
    fn group_items_are_set_on_bind() {
        let engine = setup(&flat());

        assert_eq!(
            options(&engine, "name"),
            vec![
                json!({"name": "Joe", "age": 17, "height": 125}),
                json!({"name": "Bob", "age": 17, "height": 221}),
                json!({"name": "Tom", "age": 35, "height": 225}),
            ]
        );
        assert_eq!(
            options(&engine, "age"),
            vec![
                json!({"name": "Joe", "age": 17, "height": 125}),
                json!({"name": "Tom", "age": 35, "height": 225}),
                json!({"name": "Tom", "age": 38, "height": 185}),
            ]
        );
    }

    #[test]
    fn siblings_do_not_narrow_each_others_options() {
        let mut engine = setup(&flat());

        engine.filter_by_group("name", ["Tom"]);
        engine.filter_by_group("age", ["38"]);

        assert_eq!(
            options(&engine, "age"),
            vec![
                json!({"name": "Joe", "age": 17, "height": 125}),
                json!({"name": "Tom", "age": 35, "height": 225}),
                json!({"name": "Tom", "age": 38, "height": 185}),
            ]
        );
        assert_eq!(options(&engine, "height"), people());
        assert_eq!(
            engine.result().get(),
            vec![json!({"name": "Tom", "age": 38, "height": 185})]
        );
    }
}

mod nested_groups {
    use super::*;

    #[test]
    fn returns_filtered_result() {
        let mut engine = setup(&tree());

        engine.filter_by_group("name", ["Tom"]);

        assert_eq!(
            engine.result().get(),
            vec![
                json!({"name": "Tom", "age": 35, "height": 225}),
                json!({"name": "Tom", "age": 38, "height": 185}),
            ]
        );
    }

    #[test]
    fn result_chains_through_descendants() {
        let mut engine = setup(&tree());

        engine.filter_by_group("name", ["Tom"]);
        engine.filter_by_group("height", ["185"]);

        assert_eq!(
            engine.result().get(),
            vec![json!({"name": "Tom", "age": 38, "height": 185})]
        );
    }

    #[test]
    fn group_items_are_set_on_bind() {
        let engine = setup(&tree());

        assert_eq!(options(&engine, "name").len(), 3);
        assert_eq!(
            options(&engine, "age"),
            vec![
                json!({"name": "Joe", "age": 17, "height": 125}),
                json!({"name": "Tom", "age": 35, "height": 225}),
                json!({"name": "Tom", "age": 38, "height": 185}),
            ]
        );
        assert_eq!(options(&engine, "height"), people());
    }

    #[test]
    fn children_options_follow_parent_selection() {
        let mut engine = setup(&tree());

        engine.filter_by_group("name", ["Tom"]);

        assert_eq!(
            options(&engine, "name"),
            vec![
                json!({"name": "Joe", "age": 17, "height": 125}),
                json!({"name": "Bob", "age": 17, "height": 221}),
                json!({"name": "Tom", "age": 35, "height": 225}),
            ]
        );
        assert_eq!(
            options(&engine, "age"),
            vec![
                json!({"name": "Tom", "age": 35, "height": 225}),
                json!({"name": "Tom", "age": 38, "height": 185}),
            ]
        );
    }

    #[test]
    fn subgroup_options_narrow_on_each_level() {
        let mut engine = setup(&tree());

        engine.filter_by_group("name", ["Tom"]);
        engine.filter_by_group("age", ["38"]);

        assert_eq!(
            options(&engine, "age"),
            vec![
                json!({"name": "Tom", "age": 35, "height": 225}),
                json!({"name": "Tom", "age": 38, "height": 185}),
            ]
        );
        assert_eq!(
            options(&engine, "height"),
            vec![json!({"name": "Tom", "age": 38, "height": 185})]
        );
    }
}

mod sibling_groups {
    use super::*;

    fn siblings_under_name() -> Vec<GroupConfig> {
        vec![GroupConfig::new("name")
            .with_sub_groups(vec![GroupConfig::new("age"), GroupConfig::new("height")])]
    }

    fn toms() -> Vec<Value> {
        vec![
            json!({"name": "Tom", "age": 35, "height": 225}),
            json!({"name": "Tom", "age": 38, "height": 185}),
        ]
    }

    #[test]
    fn siblings_see_parent_selection_but_not_each_other() {
        let mut engine = setup(&siblings_under_name());

        engine.filter_by_group("name", ["Tom"]);
        engine.filter_by_group("age", ["38"]);

        assert_eq!(options(&engine, "age"), toms());
        assert_eq!(options(&engine, "height"), toms());
        assert_eq!(
            engine.result().get(),
            vec![json!({"name": "Tom", "age": 38, "height": 185})]
        );
    }

    #[test]
    fn sibling_selections_combine_with_and() {
        let mut engine = setup(&siblings_under_name());

        engine.filter_by_group("name", ["Tom"]);
        engine.filter_by_group("age", ["38"]);
        engine.filter_by_group("height", ["225"]);

        assert_eq!(options(&engine, "age"), toms());
        assert_eq!(options(&engine, "height"), toms());
        assert!(engine.result().get().is_empty());
    }
}

mod rebinding {
    use super::*;

    #[test]
    fn rebind_replaces_options_and_result_but_keeps_selections() {
        let mut engine = setup(&flat());
        engine.filter_by_group("age", ["17"]);
        assert_eq!(engine.result().get().len(), 2);

        engine.bind_data_source(vec![
            json!({"name": "Ann", "age": 17, "height": 160}),
            json!({"name": "Eve", "age": 40, "height": 170}),
        ]);

        assert_eq!(
            engine.result().get(),
            vec![json!({"name": "Ann", "age": 17, "height": 160})]
        );
        assert_eq!(options(&engine, "name").len(), 2);
        assert_eq!(engine.filter_values("age"), Some(vec!["17".to_string()]));
    }

    #[test]
    fn numeric_selection_matches_string_fields_too() {
        let mut engine = setup(&flat());
        engine.bind_data_source(vec![
            json!({"name": "Ann", "age": "17", "height": 160}),
            json!({"name": "Eve", "age": 17, "height": 170}),
        ]);

        engine.filter_by_group("age", ["17"]);

        // Distinct as native values, equal once coerced for matching
        assert_eq!(options(&engine, "age").len(), 2);
        assert_eq!(engine.result().get().len(), 2);
    }
}
