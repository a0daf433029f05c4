//! Static persona schedules: who you can follow and what their day sounds
//! like, hour by hour.
//!
//! Four New Yorkers, each with a fixed 24-entry schedule derived from
//! coarse urban sound categories. A few hours per persona are sensor gaps
//! (`data_available = false`); those hours play the flatline tone instead
//! of a categorized patch.

use crate::patch::SoundCategory;

/// One hour of one persona's day.
#[derive(Clone, Copy, Debug)]
pub struct ScheduleEntry {
    pub location: &'static str,
    pub description: &'static str,
    /// Categories heard this hour; the first is the dominant one.
    pub sounds: &'static [SoundCategory],
    pub decibels: f32,
    /// False where the sensor had no coverage. `sounds` is ignored then.
    pub data_available: bool,
}

impl ScheduleEntry {
    /// The category that colors the hour's wedge and plays on selection.
    pub fn dominant(&self) -> Option<SoundCategory> {
        if self.data_available {
            self.sounds.first().copied()
        } else {
            None
        }
    }
}

/// A followable person with a full day of schedule data.
#[derive(Debug)]
pub struct Persona {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub borough: &'static str,
    /// Accent color for the needle, scope trace, and center label.
    pub color: &'static str,
    /// One entry per hour, index = hour.
    pub schedule: [ScheduleEntry; 24],
}

impl Persona {
    /// The schedule entry for `hour` (wrapped into 0..24).
    pub fn hour(&self, hour: u8) -> &ScheduleEntry {
        &self.schedule[(hour % 24) as usize]
    }
}

/// Look up a persona by its stable id.
pub fn persona(id: &str) -> Option<&'static Persona> {
    PERSONAS.iter().find(|p| p.id == id)
}

const fn entry(
    location: &'static str,
    description: &'static str,
    sounds: &'static [SoundCategory],
    decibels: f32,
) -> ScheduleEntry {
    ScheduleEntry {
        location,
        description,
        sounds,
        decibels,
        data_available: true,
    }
}

const fn gap(location: &'static str, description: &'static str) -> ScheduleEntry {
    ScheduleEntry {
        location,
        description,
        sounds: &[],
        decibels: 0.0,
        data_available: false,
    }
}

use SoundCategory::*;

/// The shipped dataset.
pub static PERSONAS: [Persona; 4] = [
    Persona {
        id: "marisol",
        name: "Marisol Vega",
        role: "Construction flagger",
        borough: "Brooklyn",
        color: "#ffa94d",
        schedule: [
            entry("Sunset Park apartment", "Deep asleep, a box fan humming against the summer heat.", &[], 36.0),
            entry("Sunset Park apartment", "The building settles; a neighbor's TV murmurs through the wall.", &[], 35.0),
            entry("Sunset Park apartment", "The quietest hour of the night on 44th Street.", &[], 35.0),
            gap("Sunset Park apartment", "Sensor dropout overnight."),
            entry("Sunset Park apartment", "First alarm. Snooze once, regret it.", &[Alert], 48.0),
            entry("45th St station, D train", "Down to the platform with a thermos of cafe con leche.", &[Engine, Voice], 68.0),
            entry("D train, Manhattan Bridge", "Steel wheels sing crossing the East River.", &[Machinery, Engine], 78.0),
            entry("Flatbush Ave site gate", "Crew check-in; the first trucks back up to the curb.", &[Engine, Alert, Voice], 82.0),
            entry("Flatbush Ave roadbed", "Flag up. Jackhammers open the morning shift.", &[Impact, Machinery], 94.0),
            entry("Flatbush Ave roadbed", "Concrete saws take over while the trucks idle.", &[Saw, Engine], 96.0),
            entry("Flatbush Ave roadbed", "A dump truck reverses through her intersection every few minutes.", &[Alert, Engine], 88.0),
            entry("Site trailer", "Early lunch in the trailer, radio low.", &[Music, Voice], 58.0),
            entry("Flatbush Ave roadbed", "Back on the flag; the pile driver starts after lunch.", &[Impact, Engine], 97.0),
            entry("Flatbush Ave roadbed", "Saw crew cutting rebar guides all afternoon.", &[Saw, Machinery], 95.0),
            entry("Flatbush Ave roadbed", "Traffic backs up; horns answer her stop paddle.", &[Alert, Engine, Voice], 86.0),
            entry("Flatbush Ave roadbed", "Generators drone while the crew pours the last section.", &[Machinery, Engine], 90.0),
            gap("Flatbush Ave site gate", "Sensor battery died before the shift ended."),
            entry("D train home", "Dozing upright between stops.", &[Engine], 74.0),
            entry("Sunset Park, 5th Avenue", "Picking up dinner; dollar-van horns and hip-hop from a parked car.", &[Music, Engine, Voice], 72.0),
            entry("Sunset Park apartment", "Shower, then the evening news in Spanish.", &[Voice], 55.0),
            entry("Sunset Park apartment", "Phone call with her sister in Bayamon.", &[Voice], 52.0),
            entry("Sunset Park stoop", "A neighbor's dog objects to every passing skateboard.", &[Dog, Voice], 60.0),
            entry("Sunset Park apartment", "Wind-down; dishes and a telenovela.", &[Voice, Music], 50.0),
            entry("Sunset Park apartment", "Lights out before the next 4 AM alarm.", &[], 38.0),
        ],
    },
    Persona {
        id: "devon",
        name: "Devon Okafor",
        role: "ER night nurse",
        borough: "Manhattan",
        color: "#4dabf7",
        schedule: [
            entry("Harlem Hospital ER", "Monitors and hallway pages; a steady night so far.", &[Alert, Voice], 70.0),
            entry("Harlem Hospital ER", "Two ambulances in ten minutes; triage fills up.", &[Alert, Engine, Voice], 84.0),
            entry("Harlem Hospital ER", "Charting in the alcove while a floor buffer works the corridor.", &[Machinery, Voice], 66.0),
            entry("Harlem Hospital ER", "The 3 AM lull. Vending machine compressor for company.", &[Machinery], 55.0),
            gap("Harlem Hospital ER", "Sensor offline during the shift change rush."),
            entry("Harlem Hospital ER", "Handoff rounds, twenty beds in forty minutes.", &[Voice, Alert], 72.0),
            entry("Lenox Ave, walking home", "Garbage trucks own the avenue at dawn.", &[Engine, Machinery], 80.0),
            entry("125th St bodega", "Egg-and-cheese, extra salt; the grill scrapes and hisses.", &[Voice, Music], 68.0),
            entry("Harlem walk-up", "Blackout curtains drawn against the morning.", &[Engine], 58.0),
            entry("Harlem walk-up", "Asleep while the block wakes up.", &[], 44.0),
            entry("Harlem walk-up", "Asleep; a delivery truck idles under the window.", &[Engine], 62.0),
            gap("Harlem walk-up", "Window sensor knocked loose by the AC unit."),
            entry("Harlem walk-up", "Asleep through the lunch rush below.", &[], 48.0),
            entry("Harlem walk-up", "Briefly up; sirens on Lenox heading south.", &[Alert], 65.0),
            entry("Harlem walk-up", "Back under; the super drills something two floors down.", &[Machinery, Impact], 63.0),
            entry("Harlem walk-up", "Real sleep at last.", &[], 40.0),
            entry("Harlem walk-up", "Alarm; coffee while the kettle screams.", &[Alert, Voice], 56.0),
            entry("Marcus Garvey Park", "Pre-shift run; a drum circle on the east side.", &[Music, Voice, Dog], 74.0),
            entry("125th St market", "Meal-prep shopping amid checkout beeps.", &[Alert, Voice], 64.0),
            entry("Harlem walk-up", "Dinner and one episode, no more.", &[Voice, Music], 54.0),
            entry("M101 bus", "Riding down Lenox; the wheelchair lift cycles at 116th.", &[Engine, Machinery], 72.0),
            entry("Harlem Hospital locker room", "Scrubs on; the HVAC roars overhead.", &[Machinery], 68.0),
            entry("Harlem Hospital ER", "First codes of the night right at handoff.", &[Alert, Voice], 82.0),
            entry("Harlem Hospital ER", "A contractor with a nail-gun injury; the X-ray hallway echoes.", &[Voice, Impact], 71.0),
        ],
    },
    Persona {
        id: "sonny",
        name: "Sonny Adeyemi",
        role: "Street musician",
        borough: "Queens",
        color: "#9775fa",
        schedule: [
            entry("Astoria share, Crescent St", "Late practice muted into the pickup; mostly fingers on strings.", &[Music], 46.0),
            entry("Astoria share, Crescent St", "The N train rumbles the windows on its way to Ditmars.", &[Engine], 52.0),
            gap("Astoria share, Crescent St", "Sensor offline overnight."),
            entry("Astoria share, Crescent St", "Asleep at last.", &[], 37.0),
            entry("Astoria share, Crescent St", "Asleep.", &[], 35.0),
            entry("Astoria share, Crescent St", "Asleep; first flights out of LaGuardia overhead.", &[Engine], 54.0),
            entry("Astoria share, Crescent St", "Asleep through the roommate's early alarm.", &[Alert], 50.0),
            entry("Crescent St kitchen", "Tea, scales, and new strings.", &[Music], 56.0),
            entry("N train to 34th St", "Hauling the amp through rush hour.", &[Engine, Voice], 76.0),
            entry("Herald Square station", "Setting up on the mezzanine; trains pull the air past.", &[Engine, Machinery], 78.0),
            entry("Herald Square mezzanine", "First set. Coins first, then bills.", &[Busking, Voice, Engine], 80.0),
            entry("Herald Square mezzanine", "Second set; a toddler conducts from a stroller.", &[Busking, Voice], 79.0),
            entry("Herald Square mezzanine", "Lunch crowd set, best hour of the day.", &[Busking, Voice, Alert], 82.0),
            entry("Greeley Square", "Sandwich break; pigeons and delivery bikes.", &[Voice, Engine], 70.0),
            entry("Herald Square mezzanine", "Afternoon set against the announcement loop.", &[Busking, Voice], 81.0),
            gap("Herald Square mezzanine", "Recorder batteries died mid-set."),
            entry("N train to Astoria", "Counting the take between stops.", &[Engine], 74.0),
            entry("Astoria Park", "Open-air practice under the Hell Gate Bridge.", &[Busking, Dog, Voice], 68.0),
            entry("Astoria Park lawn", "A pickup soccer game provides the percussion.", &[Voice, Dog], 66.0),
            entry("Broadway, Astoria", "Dinner special at the Greek place; kitchen clatter.", &[Voice, Music], 69.0),
            entry("Crescent St stoop", "Porch set for the neighbors.", &[Busking, Voice], 63.0),
            entry("Astoria share, Crescent St", "Restringing and recording a loop idea.", &[Music], 58.0),
            entry("Astoria share, Crescent St", "Mixing the loop quietly; the N train again.", &[Music, Engine], 55.0),
            entry("Astoria share, Crescent St", "Practice amp off; the street quiets down.", &[], 42.0),
        ],
    },
    Persona {
        id: "priya",
        name: "Priya Raman",
        role: "Dog walker",
        borough: "Manhattan",
        color: "#38d9a9",
        schedule: [
            entry("East Village studio", "Asleep; the radiator ticks itself to sleep too.", &[], 38.0),
            entry("East Village studio", "Asleep.", &[], 36.0),
            entry("East Village studio", "A cab honks its way down Avenue A.", &[Alert], 47.0),
            entry("East Village studio", "Asleep.", &[], 35.0),
            gap("East Village studio", "Sensor offline before dawn."),
            entry("East Village studio", "Alarm one; the terrier upstairs beats it by a minute.", &[Dog, Alert], 51.0),
            entry("Tompkins Square dog run", "First shift: three beagles and the sunrise crowd.", &[Dog, Voice], 64.0),
            entry("Avenue B loop", "School drop-off traffic; leashes and crosswalk counts.", &[Engine, Dog, Voice], 72.0),
            entry("Stuyvesant Town loop", "Mid-rise wind and a delivery-robot standoff.", &[Dog, Engine], 66.0),
            entry("East Village studio", "Coffee and schedule juggling between walks.", &[Voice], 50.0),
            entry("Gramercy townhouse", "Picking up Biscuit, who saw a squirrel once and never forgot.", &[Dog], 61.0),
            entry("Madison Square Park", "The 11 AM pack walk; a saxophone by the fountain.", &[Dog, Busking, Voice], 70.0),
            entry("Madison Square Park", "Lunch-line hum; the pack rests in the shade.", &[Voice, Engine], 68.0),
            entry("23rd St crosstown", "Crosstown bus drafts; Biscuit disapproves.", &[Engine, Dog], 75.0),
            entry("Gramercy townhouse", "Drop-offs; a super pressure-washing the sidewalk next door.", &[Machinery, Dog], 78.0),
            entry("East Village studio", "Invoices, treats inventory, one nap denied.", &[], 45.0),
            entry("Tompkins Square dog run", "After-school shift, maximum zoomies.", &[Dog, Voice], 73.0),
            entry("Avenue A loop", "Rush hour leash slalom.", &[Engine, Dog, Alert], 76.0),
            gap("East Village studio", "Sensor offline during a charger mixup."),
            entry("Veselka counter", "Pierogi and the evening regulars.", &[Voice, Music], 67.0),
            entry("East Village studio", "Last walk done; billing sprint.", &[Voice], 49.0),
            entry("7th St corner", "A jazz trio spilling out of the bar window.", &[Music, Voice], 65.0),
            entry("East Village studio", "Winding down; the upstairs terrier gets the last word.", &[Dog], 44.0),
            entry("East Village studio", "Lights out.", &[], 37.0),
        ],
    },
];
