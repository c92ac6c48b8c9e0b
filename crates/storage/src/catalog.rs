//! The shipped reference data: the 12-day rotation definitions and the
//! exercise library recommended for each day.

use crate::models::{DayDefinition, Exercise};

/// The 12-day rotation definitions.
pub fn workout_days() -> Vec<DayDefinition> {
    let days: [(u8, &str, &str, &[&str], Option<&str>); 12] = [
        (
            1,
            "Compound: Legs",
            "Main Lift: Squat. Systemic leg strength.",
            &["legs", "glutes", "quads"],
            None,
        ),
        (2, "Calves", "Active recovery.", &["calves"], None),
        (
            3,
            "Hamstring",
            "Isolation. (Safe here since Day 1 was Squats).",
            &["hamstrings"],
            None,
        ),
        (4, "Abs", "Flexion focus.", &["abs", "core"], None),
        (
            5,
            "Compound: Pulls",
            "Main Lift: Back/Rows. Systemic pulling strength.",
            &["back", "lats"],
            None,
        ),
        (6, "Bicep", "Accessory work.", &["biceps"], None),
        (
            7,
            "Torso",
            "Extension/Rotation. Placed here to save lower back for Day 1.",
            &["core", "back"],
            None,
        ),
        (
            8,
            "Pecs (Mobility)",
            "The Primer. Light flys/holds to prep shoulder capsule. ⚠️ NO DIPS or heavy pressing.",
            &["chest"],
            Some("Shoulder health priority - light work only"),
        ),
        (
            9,
            "Compound: Push",
            "Main Lift: DB Bench. Heavy chest/front delt focus.",
            &["chest", "shoulders", "triceps"],
            None,
        ),
        (
            10,
            "Triceps",
            "Isolation. Focus on \"feel\" to save elbows.",
            &["triceps"],
            None,
        ),
        (11, "Deltoid", "Shoulder isolation.", &["shoulders", "delts"], None),
        (12, "Grip", "Forearm/Hand focus. Final burnout.", &["forearms", "grip"], None),
    ];

    days.into_iter()
        .map(|(day_number, name, focus, groups, warning)| DayDefinition {
            day_number,
            name: name.to_string(),
            focus: focus.to_string(),
            primary_muscle_groups: groups.iter().map(|g| g.to_string()).collect(),
            warning: warning.map(str::to_string),
        })
        .collect()
}

/// The exercise library, keyed by rotation day.
pub fn exercise_library() -> Vec<Exercise> {
    vec![
        // Compound: Legs
        Exercise::new("Barbell Squat (Smith Machine)", 1, "Smith Machine", "Gym")
            .with_target_weight(115.0)
            .with_target_reps("6-8")
            .with_target_sets(4),
        Exercise::new("Leg Press", 1, "Leg Press Machine", "Gym")
            .with_target_weight(140.0)
            .with_target_reps(12)
            .with_target_sets(3),
        Exercise::new("Leg Extension", 1, "Leg Extension Machine", "Gym")
            .with_target_weight(60.0)
            .with_target_reps("12-15")
            .with_target_sets(3)
            .with_notes("Lowest seat, legs notch 1, back notch 1. Superset with leg curls"),
        Exercise::new("Leg Curl", 1, "Leg Curl Machine", "Gym")
            .with_target_weight(60.0)
            .with_target_reps("12-15")
            .with_target_sets(3)
            .with_notes("Highest seat, legs at lowest notch. Superset with leg extension"),
        Exercise::new("Seated Calf Raises", 1, "Bench + Dumbbells", "Gym")
            .with_target_weight(80.0)
            .with_target_reps(12)
            .with_target_sets(3),
        // Calves
        Exercise::new("Calf Stands", 2, "Bodyweight", "Anywhere")
            .with_target_reps("5 minutes")
            .with_notes("Stand on toes for about 5 minutes"),
        Exercise::new("Calf Stretches", 2, "None", "Anywhere"),
        Exercise::new("Seated Calf Raises", 2, "Seated Calf Raise Machine", "Gym")
            .with_target_weight(90.0)
            .with_target_reps(12)
            .with_target_sets(3),
        // Hamstring
        Exercise::new("Single Leg Cable Stretch (Front)", 3, "Cable", "Gym")
            .with_target_reps("3-5 minutes, 2-5 times"),
        Exercise::new("Single Leg Cable Stretch (Side)", 3, "Cable", "Gym")
            .with_target_reps("3-5 minutes, 2-5 times"),
        Exercise::new("Single Leg Forward Lean", 3, "Bodyweight", "Anywhere"),
        Exercise::new("Seated Splits", 3, "None", "Anywhere"),
        // Abs
        Exercise::new("Crunches", 4, "Bodyweight", "Anywhere"),
        Exercise::new("Under Leg Crunches", 4, "Bodyweight", "Anywhere"),
        // Compound: Pulls
        Exercise::new("Lat Pulldowns", 5, "Cable Machine", "Home")
            .with_target_weight(40.0)
            .with_target_reps(12)
            .with_target_sets(3),
        Exercise::new("Bent-Over Rows", 5, "Barbell", "Home")
            .with_target_weight(35.0)
            .with_target_reps(12)
            .with_target_sets(3),
        Exercise::new("Seated Cable Rows", 5, "Cable Machine", "Home")
            .with_target_weight(80.0)
            .with_target_reps(12)
            .with_target_sets(3),
        // Biceps
        Exercise::new("Dumbbell Bicep Curl", 6, "Dumbbells", "Home")
            .with_target_weight(20.0)
            .with_target_reps("Failure")
            .with_target_sets(3)
            .with_notes("Reps to failure, decrease weight by 5-10 each time"),
        Exercise::new("Cable Bicep Curl", 6, "Cable Machine", "Home")
            .with_target_weight(20.0)
            .with_target_reps("Failure")
            .with_target_sets(3)
            .with_notes("Reps to failure, decrease weight by 5-10 each time"),
        // Torso
        Exercise::new("Torso Twist", 7, "Torso Twist Machine", "Gym")
            .with_target_weight(90.0)
            .with_target_reps(20)
            .with_target_sets(3)
            .with_notes("Max twist. One set is rotating from each side"),
        Exercise::new("Back Extension (Seated)", 7, "Seated Back Extension Machine", "Gym")
            .with_target_weight(140.0)
            .with_target_reps(12)
            .with_target_sets(3)
            .with_notes("Max range of motion"),
        Exercise::new("Hip Adductor", 7, "Hip Adductor Machine", "Gym")
            .with_target_weight(100.0)
            .with_target_reps("Failure")
            .with_target_sets(3)
            .with_notes("Max stretch. Involves static stretching and contractions"),
        Exercise::new("Hip Abductor", 7, "Hip Abductor Machine", "Gym")
            .with_target_weight(80.0)
            .with_target_reps("Failure")
            .with_target_sets(3),
        Exercise::new("Situps", 7, "Situp Device", "Gym")
            .with_target_reps(12)
            .with_target_sets(3),
        // Pecs (Mobility)
        Exercise::new("Dumbbell Bench Press (Light)", 8, "Dumbbells", "Home")
            .with_target_weight(20.0)
            .with_target_reps(12)
            .with_target_sets(3)
            .with_notes("⚠️ Light weight only for mobility"),
        Exercise::new("Cable Fly", 8, "Cable Machine", "Home")
            .with_notes("⚠️ Light weight, focus on stretch"),
        Exercise::new("Static Hold (Lowered Position)", 8, "Dumbbells", "Home")
            .with_notes("⚠️ Horizontal dumbbell hold in lowered position"),
        // Compound: Push
        Exercise::new("Barbell Bench Press (Smith Machine)", 9, "Smith Machine", "Gym")
            .with_target_weight(115.0)
            .with_target_reps(12)
            .with_target_sets(3),
        Exercise::new("Dumbbell Bench Press", 9, "Dumbbells", "Home")
            .with_target_weight(20.0)
            .with_target_reps(12)
            .with_target_sets(3)
            .with_notes("Reps to failure, decreasing weight"),
        // Negative weight: the dip machine assists rather than loads.
        Exercise::new("Dips", 9, "Dip Machine", "Gym")
            .with_target_weight(-90.0)
            .with_target_reps("15-20")
            .with_target_sets(3),
        // Triceps
        Exercise::new("Cable Standing High Cross", 10, "Cable Machine", "Home"),
        Exercise::new("Tricep Pushdown", 10, "Cable Machine", "Home"),
        Exercise::new("Tricep Extension (Katana)", 10, "Dumbbell", "Home")
            .with_target_weight(10.0),
        // Deltoids
        Exercise::new("Reverse Delt Cable Fly", 11, "Cable Machine", "Home"),
        Exercise::new("Side Delt Cable Raises", 11, "Cable Machine", "Home"),
        Exercise::new("Front Deltoid Raises (Bottom to Top)", 11, "Cable Machine", "Home"),
        Exercise::new("Front Deltoid Raises (Top to Bottom)", 11, "Cable Machine", "Home"),
        Exercise::new("Rotator Cuff Work", 11, "Light Weight", "Home"),
        // Grip
        Exercise::new("Gripper - Trainer", 12, "Hand Gripper", "Home")
            .with_target_reps("Failure")
            .with_target_sets(3)
            .with_notes("Start with left/weak side"),
        Exercise::new("Gripper - Sport", 12, "Hand Gripper", "Home")
            .with_target_reps("Failure")
            .with_target_sets(3)
            .with_notes("Start with left/weak side"),
        Exercise::new("Gripper - Guide", 12, "Hand Gripper", "Home")
            .with_target_reps("Failure")
            .with_target_sets(3)
            .with_notes("Start with left/weak side"),
        Exercise::new("Wrist Curls (Pronated)", 12, "Dumbbells", "Home")
            .with_target_weight(20.0)
            .with_target_reps("Failure")
            .with_target_sets(3),
        Exercise::new("Wrist Curls (Supinated)", 12, "Dumbbells", "Home")
            .with_target_weight(20.0)
            .with_target_reps("Failure")
            .with_target_sets(3),
    ]
}
