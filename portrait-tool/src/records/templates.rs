/// Fixed record templates for portrait sets, species and categories.
use crate::clausewitz::{Block, Value};
use crate::settings::Archetype;

pub fn portrait_sets(set_name: &str, species_class: &str, portraits: Vec<String>) -> Block {
    Block::new().with(
        set_name,
        Block::new()
            .with("species_class", species_class)
            .with("portraits", portraits),
    )
}

/// Species class template. Only the machine template carries leader age
/// bounds and the DLC gated `playable`/`randomized` triggers.
pub fn species_class(class_name: &str, archetype: Archetype) -> Block {
    let class = match archetype {
        Archetype::Biological => Block::new()
            .with("archetype", archetype.as_str())
            .with(
                "possible",
                Block::new().with(
                    "authority",
                    Block::new().with(
                        "NOT",
                        Block::new()
                            .with("value", "auth_machine_intelligence")
                            .with("text", "SPECIES_CLASS_MUST_NOT_USE_MACHINE_INTELLIGENCE"),
                    ),
                ),
            )
            .with(
                "custom_portraits",
                Block::new().with("trigger", Block::new().with("always", true)),
            )
            .with("graphical_culture", "mammalian_01")
            .with("move_pop_sound_effect", "moving_pop_confirmation")
            .with("resources", Block::new()),
        Archetype::Machine => {
            let dlc = "Synthetic Dawn Story Pack";
            Block::new()
                .with("archetype", archetype.as_str())
                .with("playable", Block::new().with("host_has_dlc", dlc))
                .with(
                    "randomized",
                    Block::new()
                        .with("host_has_dlc", dlc)
                        .with("NOT", Block::new().with("has_global_flag", "game_started")),
                )
                .with(
                    "possible",
                    Block::new().with(
                        "authority",
                        Block::new().with(
                            "OR",
                            Block::new()
                                .with("value", "auth_machine_intelligence")
                                .with("text", "SPECIES_CLASS_MUST_USE_MACHINE_INTELLIGENCE"),
                        ),
                    ),
                )
                .with(
                    "possible_secondary",
                    Block::new()
                        .with("always", false)
                        .with("text", "SECONDARY_SPECIES_CLASS_INVALID"),
                )
                .with("robotic", true)
                .with("gender", false)
                .with("use_climate_preference", false)
                .with("portrait_modding", true)
                .with("leader_age_min", 2i64)
                .with("leader_age_max", 10i64)
                .with("graphical_culture", "synthetics_01")
                .with("move_pop_sound_effect", "robot_pops_move")
                .with("resources", Block::new())
        }
    };
    Block::new().with(class_name, class)
}

pub fn species_names(class_name: &str, archetype: Archetype) -> Block {
    let (name, plural, home_planet, home_system, name_list) = match archetype {
        Archetype::Biological => ("Mammalian", "Mammalians", "Cradle", "Genesis", "MAM1"),
        Archetype::Machine => ("Machine", "Machines", "CPU", "Motherboard", "MACHINE4"),
    };
    Block::new().with(
        class_name,
        Block::new().with(
            "named_species",
            Block::new()
                .with("name", name)
                .with("plural", plural)
                .with("home_planet", home_planet)
                .with("home_system", home_system)
                .with("name_list", name_list),
        ),
    )
}

pub fn portrait_categories(category_name: &str, portrait_set: &str) -> Block {
    Block::new().with(
        category_name,
        Block::new()
            .with("name", category_name)
            .with("sets", Value::List(vec![Value::from(portrait_set)])),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clausewitz::ClausewitzWriter;

    fn class_body(block: &Block, name: &str) -> Block {
        match block.get(name) {
            Some(Value::Block(body)) => body.clone(),
            other => panic!("expected block for {name}, got {other:?}"),
        }
    }

    #[test]
    fn machine_class_has_leader_age_bounds() {
        let machine = class_body(
            &species_class("mymod_machine_class", Archetype::Machine),
            "mymod_machine_class",
        );
        assert_eq!(machine.get("leader_age_min"), Some(&Value::Int(2)));
        assert_eq!(machine.get("leader_age_max"), Some(&Value::Int(10)));
        assert_eq!(machine.get("graphical_culture"), Some(&Value::from("synthetics_01")));
        assert!(machine.contains_key("randomized"));

        let biological = class_body(
            &species_class("mymod_biological_class", Archetype::Biological),
            "mymod_biological_class",
        );
        assert!(!biological.contains_key("leader_age_min"));
        assert!(!biological.contains_key("leader_age_max"));
        assert_eq!(
            biological.get("graphical_culture"),
            Some(&Value::from("mammalian_01"))
        );
    }

    #[test]
    fn machine_class_renders_quoted_dlc_name() {
        let text = ClausewitzWriter::default()
            .render(&species_class("mymod_machine_class", Archetype::Machine));
        assert!(text.starts_with("mymod_machine_class = {\n    archetype = MACHINE\n"));
        assert!(text.contains("        host_has_dlc = \"Synthetic Dawn Story Pack\"\n"));
        assert!(text.contains("    leader_age_min = 2\n    leader_age_max = 10\n"));
        assert!(text.contains("    robotic = yes\n    gender = no\n"));
        assert!(text.ends_with("    resources = {}\n}"));
    }

    #[test]
    fn species_names_render() {
        let text = ClausewitzWriter::default()
            .render(&species_names("mymod_machine_class", Archetype::Machine));
        let expected = "\
mymod_machine_class = {
    named_species = {
        name = Machine
        plural = Machines
        home_planet = CPU
        home_system = Motherboard
        name_list = \"MACHINE4\"
    }
}";
        assert_eq!(text, expected);
    }

    #[test]
    fn sets_and_categories_render() {
        let writer = ClausewitzWriter::default();
        let sets = writer.render(&portrait_sets(
            "mymod_portrait_set",
            "mymod_biological_class",
            vec!["mymod_human".to_string(), "mymod_orc".to_string()],
        ));
        assert_eq!(
            sets,
            "mymod_portrait_set = {\n    species_class = mymod_biological_class\n    portraits = {\n        mymod_human\n        mymod_orc\n    }\n}"
        );

        let categories = writer.render(&portrait_categories(
            "mymod_portrait_category",
            "mymod_portrait_set",
        ));
        assert_eq!(
            categories,
            "mymod_portrait_category = {\n    name = mymod_portrait_category\n    sets = {\n        mymod_portrait_set\n    }\n}"
        );
    }
}
