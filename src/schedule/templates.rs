//! Built-in split templates
//!
//! Static defaults for every split offered in the questionnaire. Only the
//! first split carries default loads; the rest rely on prescription.

use crate::models::ExerciseTemplate;

#[derive(Debug)]
pub struct SplitTemplate {
  /// Questionnaire label, e.g. "Upper, lower"
  pub key: &'static str,
  pub name: &'static str,
  pub description: &'static str,
  pub days: &'static [DayTemplate],
}

#[derive(Debug)]
pub struct DayTemplate {
  pub day: &'static str,
  pub focus: &'static str,
  pub exercises: &'static [TemplateExercise],
}

#[derive(Debug)]
pub struct TemplateExercise {
  pub name: &'static str,
  pub sets: u32,
  pub reps: &'static str,
  pub rest: &'static str,
  pub weight: Option<&'static str>,
}

impl TemplateExercise {
  pub fn to_template(&self) -> ExerciseTemplate {
    ExerciseTemplate {
      name: self.name.to_string(),
      sets: self.sets,
      reps: self.reps.to_string(),
      rest: self.rest.to_string(),
      weight: self.weight.map(str::to_string),
      notes: None,
    }
  }
}

const fn ex(name: &'static str, sets: u32, reps: &'static str, rest: &'static str) -> TemplateExercise {
  TemplateExercise { name, sets, reps, rest, weight: None }
}

const fn exw(
  name: &'static str,
  sets: u32,
  reps: &'static str,
  rest: &'static str,
  weight: &'static str,
) -> TemplateExercise {
  TemplateExercise { name, sets, reps, rest, weight: Some(weight) }
}

pub const SPLIT_TEMPLATES: &[SplitTemplate] = &[
  SplitTemplate {
    key: "Upper, lower",
    name: "Upper/Lower Split",
    description: "Balanced training with double frequency for upper and lower body",
    days: &[
      DayTemplate {
        day: "Day 1",
        focus: "Upper Body",
        exercises: &[
          exw("Bench Press", 4, "8-10", "90s", "60kg"),
          exw("Barbell Row", 4, "8-10", "90s", "50kg"),
          exw("Overhead Press", 3, "10-12", "60s", "40kg"),
          exw("Pull-ups", 3, "8-12", "60s", "bodyweight"),
          exw("Dumbbell Curl", 3, "12-15", "45s", "12kg"),
          exw("Tricep Dips", 3, "12-15", "45s", "bodyweight"),
        ],
      },
      DayTemplate {
        day: "Day 2",
        focus: "Lower Body",
        exercises: &[
          exw("Squat", 4, "8-10", "2min", "80kg"),
          exw("Romanian Deadlift", 4, "8-10", "90s", "60kg"),
          exw("Leg Press", 3, "12-15", "60s", "120kg"),
          exw("Leg Curl", 3, "12-15", "60s", "40kg"),
          exw("Calf Raise", 4, "15-20", "45s", "60kg"),
        ],
      },
      DayTemplate {
        day: "Day 3",
        focus: "Upper Body",
        exercises: &[
          exw("Incline Dumbbell Press", 4, "8-10", "90s", "25kg"),
          exw("Lat Pulldown", 4, "10-12", "60s", "50kg"),
          exw("Dumbbell Shoulder Press", 3, "10-12", "60s", "20kg"),
          exw("Cable Row", 3, "12-15", "60s", "45kg"),
          exw("Hammer Curl", 3, "12-15", "45s", "15kg"),
          exw("Overhead Tricep Extension", 3, "12-15", "45s", "20kg"),
        ],
      },
      DayTemplate {
        day: "Day 4",
        focus: "Lower Body",
        exercises: &[
          exw("Deadlift", 4, "6-8", "2min", "100kg"),
          exw("Bulgarian Split Squat", 3, "10-12", "90s", "20kg"),
          exw("Leg Extension", 3, "12-15", "60s", "50kg"),
          exw("Hamstring Curl", 3, "12-15", "60s", "35kg"),
          exw("Seated Calf Raise", 4, "15-20", "45s", "40kg"),
        ],
      },
    ],
  },
  SplitTemplate {
    key: "Push, pull, legs",
    name: "Push/Pull/Legs",
    description: "Focus on one movement pattern per day, ideal for hypertrophy",
    days: &[
      DayTemplate {
        day: "Day 1",
        focus: "Push",
        exercises: &[
          ex("Bench Press", 4, "8-10", "90s"),
          ex("Overhead Press", 4, "8-10", "90s"),
          ex("Incline Dumbbell Press", 3, "10-12", "60s"),
          ex("Lateral Raise", 3, "12-15", "45s"),
          ex("Tricep Pushdown", 3, "12-15", "45s"),
          ex("Overhead Tricep Extension", 3, "12-15", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 2",
        focus: "Pull",
        exercises: &[
          ex("Deadlift", 4, "6-8", "2min"),
          ex("Pull-ups", 4, "8-12", "90s"),
          ex("Barbell Row", 4, "8-10", "90s"),
          ex("Face Pulls", 3, "15-20", "45s"),
          ex("Barbell Curl", 3, "10-12", "60s"),
          ex("Hammer Curl", 3, "12-15", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 3",
        focus: "Legs",
        exercises: &[
          ex("Squat", 4, "8-10", "2min"),
          ex("Romanian Deadlift", 4, "8-10", "90s"),
          ex("Leg Press", 3, "12-15", "60s"),
          ex("Leg Curl", 3, "12-15", "60s"),
          ex("Leg Extension", 3, "12-15", "60s"),
          ex("Calf Raise", 4, "15-20", "45s"),
        ],
      },
    ],
  },
  SplitTemplate {
    key: "Full body",
    name: "Full Body",
    description: "Ideal for beginners or limited time, trains entire body each session",
    days: &[
      DayTemplate {
        day: "Day 1",
        focus: "Full Body",
        exercises: &[
          ex("Squat", 4, "8-10", "2min"),
          ex("Bench Press", 4, "8-10", "90s"),
          ex("Barbell Row", 3, "10-12", "90s"),
          ex("Overhead Press", 3, "10-12", "60s"),
          ex("Romanian Deadlift", 3, "10-12", "90s"),
          ex("Plank", 3, "60s", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 2",
        focus: "Full Body",
        exercises: &[
          ex("Deadlift", 4, "6-8", "2min"),
          ex("Incline Dumbbell Press", 3, "10-12", "90s"),
          ex("Pull-ups", 3, "8-12", "90s"),
          ex("Leg Press", 3, "12-15", "60s"),
          ex("Dumbbell Shoulder Press", 3, "10-12", "60s"),
          ex("Leg Curl", 3, "12-15", "60s"),
        ],
      },
      DayTemplate {
        day: "Day 3",
        focus: "Full Body",
        exercises: &[
          ex("Front Squat", 3, "10-12", "90s"),
          ex("Dumbbell Bench Press", 3, "10-12", "90s"),
          ex("Lat Pulldown", 3, "12-15", "60s"),
          ex("Bulgarian Split Squat", 3, "10-12", "60s"),
          ex("Cable Fly", 3, "12-15", "45s"),
          ex("Face Pulls", 3, "15-20", "45s"),
        ],
      },
    ],
  },
  SplitTemplate {
    key: "Bro split",
    name: "Bro Split",
    description: "Classic approach, dedicate each session to a single muscle group",
    days: &[
      DayTemplate {
        day: "Day 1",
        focus: "Chest",
        exercises: &[
          ex("Bench Press", 4, "8-10", "90s"),
          ex("Incline Dumbbell Press", 4, "10-12", "90s"),
          ex("Cable Fly", 3, "12-15", "60s"),
          ex("Dips", 3, "10-12", "60s"),
          ex("Push-ups", 3, "15-20", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 2",
        focus: "Back",
        exercises: &[
          ex("Deadlift", 4, "6-8", "2min"),
          ex("Pull-ups", 4, "8-12", "90s"),
          ex("Barbell Row", 4, "8-10", "90s"),
          ex("Lat Pulldown", 3, "12-15", "60s"),
          ex("Face Pulls", 3, "15-20", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 3",
        focus: "Shoulders",
        exercises: &[
          ex("Overhead Press", 4, "8-10", "90s"),
          ex("Dumbbell Shoulder Press", 4, "10-12", "90s"),
          ex("Lateral Raise", 4, "12-15", "45s"),
          ex("Front Raise", 3, "12-15", "45s"),
          ex("Rear Delt Fly", 3, "15-20", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 4",
        focus: "Arms",
        exercises: &[
          ex("Barbell Curl", 4, "10-12", "60s"),
          ex("Tricep Dips", 4, "10-12", "60s"),
          ex("Hammer Curl", 3, "12-15", "45s"),
          ex("Overhead Tricep Extension", 3, "12-15", "45s"),
          ex("Cable Curl", 3, "15-20", "45s"),
          ex("Tricep Pushdown", 3, "15-20", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 5",
        focus: "Legs",
        exercises: &[
          ex("Squat", 4, "8-10", "2min"),
          ex("Romanian Deadlift", 4, "8-10", "90s"),
          ex("Leg Press", 4, "12-15", "60s"),
          ex("Leg Curl", 3, "12-15", "60s"),
          ex("Leg Extension", 3, "12-15", "60s"),
          ex("Calf Raise", 4, "15-20", "45s"),
        ],
      },
    ],
  },
  SplitTemplate {
    key: "Push, pull, legs, full body",
    name: "PPL + Full Body",
    description: "Blend push, pull, and leg routines with full body sessions",
    days: &[
      DayTemplate {
        day: "Day 1",
        focus: "Push",
        exercises: &[
          ex("Bench Press", 4, "8-10", "90s"),
          ex("Overhead Press", 3, "10-12", "90s"),
          ex("Incline Dumbbell Press", 3, "10-12", "60s"),
          ex("Lateral Raise", 3, "12-15", "45s"),
          ex("Tricep Pushdown", 3, "12-15", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 2",
        focus: "Pull",
        exercises: &[
          ex("Deadlift", 4, "6-8", "2min"),
          ex("Pull-ups", 3, "8-12", "90s"),
          ex("Barbell Row", 3, "10-12", "90s"),
          ex("Face Pulls", 3, "15-20", "45s"),
          ex("Barbell Curl", 3, "12-15", "60s"),
        ],
      },
      DayTemplate {
        day: "Day 3",
        focus: "Legs",
        exercises: &[
          ex("Squat", 4, "8-10", "2min"),
          ex("Romanian Deadlift", 3, "10-12", "90s"),
          ex("Leg Press", 3, "12-15", "60s"),
          ex("Leg Curl", 3, "12-15", "60s"),
          ex("Calf Raise", 3, "15-20", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 4",
        focus: "Full Body",
        exercises: &[
          ex("Front Squat", 3, "10-12", "90s"),
          ex("Dumbbell Bench Press", 3, "10-12", "90s"),
          ex("Lat Pulldown", 3, "12-15", "60s"),
          ex("Dumbbell Shoulder Press", 3, "10-12", "60s"),
          ex("Leg Curl", 3, "12-15", "60s"),
        ],
      },
    ],
  },
  SplitTemplate {
    key: "Push, pull, legs, upper, lower",
    name: "PPL + Upper/Lower",
    description: "Increased frequency and volume with additional upper/lower days",
    days: &[
      DayTemplate {
        day: "Day 1",
        focus: "Push",
        exercises: &[
          ex("Bench Press", 4, "8-10", "90s"),
          ex("Overhead Press", 3, "10-12", "90s"),
          ex("Incline Dumbbell Press", 3, "10-12", "60s"),
          ex("Lateral Raise", 3, "12-15", "45s"),
          ex("Tricep Dips", 3, "10-12", "60s"),
        ],
      },
      DayTemplate {
        day: "Day 2",
        focus: "Pull",
        exercises: &[
          ex("Deadlift", 4, "6-8", "2min"),
          ex("Pull-ups", 4, "8-12", "90s"),
          ex("Barbell Row", 3, "10-12", "90s"),
          ex("Face Pulls", 3, "15-20", "45s"),
          ex("Barbell Curl", 3, "12-15", "60s"),
        ],
      },
      DayTemplate {
        day: "Day 3",
        focus: "Legs",
        exercises: &[
          ex("Squat", 4, "8-10", "2min"),
          ex("Romanian Deadlift", 3, "10-12", "90s"),
          ex("Leg Press", 3, "12-15", "60s"),
          ex("Leg Curl", 3, "12-15", "60s"),
          ex("Calf Raise", 4, "15-20", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 4",
        focus: "Upper Body",
        exercises: &[
          ex("Incline Bench Press", 4, "8-10", "90s"),
          ex("Lat Pulldown", 3, "12-15", "60s"),
          ex("Dumbbell Shoulder Press", 3, "10-12", "60s"),
          ex("Cable Row", 3, "12-15", "60s"),
          ex("Hammer Curl", 3, "12-15", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 5",
        focus: "Lower Body",
        exercises: &[
          ex("Front Squat", 3, "10-12", "90s"),
          ex("Bulgarian Split Squat", 3, "10-12", "90s"),
          ex("Leg Extension", 3, "12-15", "60s"),
          ex("Hamstring Curl", 3, "12-15", "60s"),
          ex("Seated Calf Raise", 3, "15-20", "45s"),
        ],
      },
    ],
  },
  SplitTemplate {
    key: "Upper, lower, full body",
    name: "Upper/Lower + Full Body",
    description: "Balance training with rest day between full body sessions",
    days: &[
      DayTemplate {
        day: "Day 1",
        focus: "Upper Body",
        exercises: &[
          ex("Bench Press", 4, "8-10", "90s"),
          ex("Barbell Row", 4, "8-10", "90s"),
          ex("Overhead Press", 3, "10-12", "60s"),
          ex("Pull-ups", 3, "8-12", "60s"),
          ex("Dumbbell Curl", 3, "12-15", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 2",
        focus: "Lower Body",
        exercises: &[
          ex("Squat", 4, "8-10", "2min"),
          ex("Romanian Deadlift", 4, "8-10", "90s"),
          ex("Leg Press", 3, "12-15", "60s"),
          ex("Leg Curl", 3, "12-15", "60s"),
          ex("Calf Raise", 4, "15-20", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 3",
        focus: "Full Body",
        exercises: &[
          ex("Deadlift", 4, "6-8", "2min"),
          ex("Dumbbell Bench Press", 3, "10-12", "90s"),
          ex("Lat Pulldown", 3, "12-15", "60s"),
          ex("Bulgarian Split Squat", 3, "10-12", "90s"),
          ex("Dumbbell Shoulder Press", 3, "10-12", "60s"),
        ],
      },
    ],
  },
  SplitTemplate {
    key: "Lower focused + upper",
    name: "Lower Focused + Upper",
    description: "Focus on legs/glutes twice per week with upper body work",
    days: &[
      DayTemplate {
        day: "Day 1",
        focus: "Lower Body (Quad Focus)",
        exercises: &[
          ex("Squat", 4, "8-10", "2min"),
          ex("Leg Press", 4, "12-15", "90s"),
          ex("Leg Extension", 3, "12-15", "60s"),
          ex("Bulgarian Split Squat", 3, "10-12", "90s"),
          ex("Calf Raise", 4, "15-20", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 2",
        focus: "Upper Body",
        exercises: &[
          ex("Bench Press", 4, "8-10", "90s"),
          ex("Barbell Row", 4, "8-10", "90s"),
          ex("Overhead Press", 3, "10-12", "60s"),
          ex("Pull-ups", 3, "8-12", "60s"),
          ex("Dumbbell Curl", 3, "12-15", "45s"),
          ex("Tricep Dips", 3, "12-15", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 3",
        focus: "Lower Body (Glute/Hamstring Focus)",
        exercises: &[
          ex("Romanian Deadlift", 4, "8-10", "90s"),
          ex("Hip Thrust", 4, "10-12", "90s"),
          ex("Leg Curl", 4, "12-15", "60s"),
          ex("Walking Lunges", 3, "12-15", "60s"),
          ex("Glute Kickback", 3, "15-20", "45s"),
        ],
      },
    ],
  },
  SplitTemplate {
    key: "Push, pull, legs, upper body",
    name: "PPL + Upper Body",
    description: "Emphasizes upper body development with extra upper day",
    days: &[
      DayTemplate {
        day: "Day 1",
        focus: "Push",
        exercises: &[
          ex("Bench Press", 4, "8-10", "90s"),
          ex("Overhead Press", 4, "8-10", "90s"),
          ex("Incline Dumbbell Press", 3, "10-12", "60s"),
          ex("Lateral Raise", 3, "12-15", "45s"),
          ex("Tricep Pushdown", 3, "12-15", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 2",
        focus: "Pull",
        exercises: &[
          ex("Deadlift", 4, "6-8", "2min"),
          ex("Pull-ups", 4, "8-12", "90s"),
          ex("Barbell Row", 4, "8-10", "90s"),
          ex("Face Pulls", 3, "15-20", "45s"),
          ex("Barbell Curl", 3, "10-12", "60s"),
        ],
      },
      DayTemplate {
        day: "Day 3",
        focus: "Legs",
        exercises: &[
          ex("Squat", 4, "8-10", "2min"),
          ex("Romanian Deadlift", 3, "10-12", "90s"),
          ex("Leg Press", 3, "12-15", "60s"),
          ex("Leg Curl", 3, "12-15", "60s"),
          ex("Calf Raise", 4, "15-20", "45s"),
        ],
      },
      DayTemplate {
        day: "Day 4",
        focus: "Upper Body",
        exercises: &[
          ex("Incline Bench Press", 4, "8-10", "90s"),
          ex("Lat Pulldown", 3, "12-15", "60s"),
          ex("Dumbbell Shoulder Press", 3, "10-12", "60s"),
          ex("Cable Row", 3, "12-15", "60s"),
          ex("Hammer Curl", 3, "12-15", "45s"),
          ex("Overhead Tricep Extension", 3, "12-15", "45s"),
        ],
      },
    ],
  },
];
