use super::subjects::Level;

/// One subject slot inside a profile definition.
#[derive(Debug, Clone)]
pub struct ProfileSubject {
    pub name: &'static str,
    pub hours: u8,
    pub level: Level,
    pub note: Option<&'static str>,
}

/// A per-semester coverage obligation attached to a profile.
///
/// Obligations are modeled structurally; [`Requirement::label`] renders the
/// wording used in the Wegweiser brochure.
#[derive(Debug, Clone)]
pub enum Requirement {
    /// A named subject with a weekly-hour count, e.g. "2 Std. Sport".
    Fixed {
        subject: &'static str,
        hours: u8,
    },
    /// Any one subject out of a fixed set.
    OneOf {
        subjects: Vec<&'static str>,
        hours: u8,
    },
    /// Free elective hours on top of the named obligations.
    AnyAdditional {
        slots: u8,
        hours: u8,
    },
}

impl Requirement {
    pub fn label(&self) -> String {
        match self {
            Requirement::Fixed { subject, hours } => format!("{hours} Std. {subject}"),
            Requirement::OneOf { subjects, hours } => {
                format!("{hours} Std. {}", subjects.join(" oder "))
            }
            Requirement::AnyAdditional { slots: 1, hours } => {
                format!("+ {hours} Std. in einem beliebigen weiteren Fach")
            }
            Requirement::AnyAdditional { hours, .. } => {
                format!("+ {hours} Std. in einem oder zwei beliebigen weiteren Fächern")
            }
        }
    }
}

/// Profile definition per the Gymnasium Blankenese Wegweiser.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub profilgebend: Vec<ProfileSubject>,
    pub profilbegleitend: Vec<ProfileSubject>,
    pub seminar: &'static str,
    pub kernfach_besonderheit: Option<&'static str>,
    pub belegverpflichtungen: Vec<Requirement>,
}

impl Profile {
    /// Names of both profile-defining and profile-accompanying subjects.
    pub fn subject_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.profilgebend
            .iter()
            .chain(self.profilbegleitend.iter())
            .map(|subject| subject.name)
    }
}

#[derive(Debug)]
pub struct ProfileCatalog {
    profiles: Vec<Profile>,
}

impl ProfileCatalog {
    pub fn standard() -> Self {
        Self {
            profiles: standard_profiles(),
        }
    }

    pub fn by_id(&self, profile_id: &str) -> Option<&Profile> {
        self.profiles
            .iter()
            .find(|profile| profile.id == profile_id)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }
}

fn standard_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "humanities",
            name: "Humanities",
            description: "Fact and fake, Europa und der Brexit, transatlantisches Bündnis – verstehe gesellschaftspolitische, wirtschaftliche und historische Fragen mit anglo-amerikanischem Schwerpunkt.",
            profilgebend: vec![
                ProfileSubject {
                    name: "Geschichte",
                    hours: 4,
                    level: Level::EA,
                    note: None,
                },
                ProfileSubject {
                    name: "PGW",
                    hours: 4,
                    level: Level::EA,
                    note: None,
                },
            ],
            profilbegleitend: vec![ProfileSubject {
                name: "Theater (englisch bilingual)",
                hours: 2,
                level: Level::GA,
                note: None,
            }],
            seminar: "in einem profilgebenden Fach (+2h)",
            kernfach_besonderheit: Some("gemeinsamer Englischkurs auf eA"),
            belegverpflichtungen: vec![
                Requirement::OneOf {
                    subjects: vec!["Philosophie", "Religion"],
                    hours: 2,
                },
                Requirement::OneOf {
                    subjects: vec!["Biologie", "Chemie", "Physik"],
                    hours: 4,
                },
                Requirement::Fixed {
                    subject: "Sport",
                    hours: 2,
                },
                Requirement::AnyAdditional { slots: 1, hours: 2 },
            ],
        },
        Profile {
            id: "kosmopolit",
            name: "Kosmopolit",
            description: "Erforsche soziale, politische, ökonomische und ökologische Themen wie Globalisierung, Migration und Nachhaltigkeit mit Schwerpunkt auf der französisch- und spanischsprachigen Welt.",
            profilgebend: vec![
                ProfileSubject {
                    name: "Spanisch oder Französisch",
                    hours: 4,
                    level: Level::EA,
                    note: None,
                },
                ProfileSubject {
                    name: "PGW",
                    hours: 4,
                    level: Level::EA,
                    note: None,
                },
            ],
            profilbegleitend: vec![ProfileSubject {
                name: "Geographie",
                hours: 2,
                level: Level::GA,
                note: None,
            }],
            seminar: "in einem profilgebenden Fach (+2h)",
            kernfach_besonderheit: Some(
                "Option: Spanisch bzw. Französisch als Kernfach statt Englisch",
            ),
            belegverpflichtungen: vec![
                Requirement::OneOf {
                    subjects: vec!["Philosophie", "Religion"],
                    hours: 2,
                },
                Requirement::OneOf {
                    subjects: vec!["Biologie", "Chemie", "Physik"],
                    hours: 4,
                },
                Requirement::OneOf {
                    subjects: vec!["Bildende Kunst", "Musik", "Theater"],
                    hours: 2,
                },
                Requirement::Fixed {
                    subject: "Sport",
                    hours: 2,
                },
            ],
        },
        Profile {
            id: "kultur",
            name: "Kultur!",
            description: "Betrachte das musisch-künstlerische Schaffen der Menschen, eingebettet in historische Entwicklung und Religion(en) mit ihren vielfältigen Bezügen auf Kunst, Musik, Literatur und Geschichte.",
            profilgebend: vec![
                ProfileSubject {
                    name: "Bildende Kunst oder Musik",
                    hours: 4,
                    level: Level::EA,
                    note: None,
                },
                ProfileSubject {
                    name: "Geschichte",
                    hours: 4,
                    level: Level::EA,
                    note: None,
                },
            ],
            profilbegleitend: vec![ProfileSubject {
                name: "Religion",
                hours: 2,
                level: Level::GA,
                note: None,
            }],
            seminar: "in einem profilgebenden Fach (+2h)",
            kernfach_besonderheit: Some("gemeinsamer Deutschkurs auf eA"),
            belegverpflichtungen: vec![
                Requirement::OneOf {
                    subjects: vec!["Biologie", "Chemie", "Physik"],
                    hours: 4,
                },
                Requirement::Fixed {
                    subject: "Sport",
                    hours: 2,
                },
                Requirement::AnyAdditional { slots: 2, hours: 4 },
            ],
        },
        Profile {
            id: "netzwerk-erde",
            name: "Netzwerk Erde",
            description: "Untersuche ökologische, soziale, ökonomische und digitale Vernetzungen. Analysiere Klimawandel, Artensterben und Biotechnologie auf ihre Nachhaltigkeit hin.",
            profilgebend: vec![
                ProfileSubject {
                    name: "Geographie",
                    hours: 4,
                    level: Level::EA,
                    note: None,
                },
                ProfileSubject {
                    name: "Biologie",
                    hours: 4,
                    level: Level::EA,
                    note: None,
                },
            ],
            profilbegleitend: vec![ProfileSubject {
                name: "Informatik",
                hours: 4,
                level: Level::GA,
                note: None,
            }],
            seminar: "in Informatik (+2h)",
            kernfach_besonderheit: None,
            belegverpflichtungen: vec![
                Requirement::OneOf {
                    subjects: vec!["Philosophie", "Religion"],
                    hours: 2,
                },
                Requirement::OneOf {
                    subjects: vec!["Bildende Kunst", "Musik", "Theater"],
                    hours: 2,
                },
                Requirement::Fixed {
                    subject: "Sport",
                    hours: 2,
                },
                Requirement::AnyAdditional { slots: 2, hours: 2 },
            ],
        },
        Profile {
            id: "wissenschaft-bewegung",
            name: "Wissenschaft in Bewegung",
            description: "Erkunde Schnittstellen zwischen Chemie, Sport und PGW. Von Ernährung über moderne Werkstoffe bis zu sportpsychologischen Mechanismen und gesellschaftlichen Wechselwirkungen.",
            profilgebend: vec![
                ProfileSubject {
                    name: "Chemie",
                    hours: 4,
                    level: Level::EA,
                    note: None,
                },
                ProfileSubject {
                    name: "Sport",
                    hours: 6,
                    level: Level::EA,
                    note: Some("davon 2h Theorie"),
                },
            ],
            profilbegleitend: vec![ProfileSubject {
                name: "PGW",
                hours: 2,
                level: Level::GA,
                note: None,
            }],
            seminar: "in einem profilgebenden Fach (+2h)",
            kernfach_besonderheit: None,
            belegverpflichtungen: vec![
                Requirement::OneOf {
                    subjects: vec!["Philosophie", "Religion"],
                    hours: 2,
                },
                Requirement::OneOf {
                    subjects: vec!["Geschichte", "Geographie", "Wirtschaft"],
                    hours: 2,
                },
                Requirement::OneOf {
                    subjects: vec!["Bildende Kunst", "Musik", "Theater"],
                    hours: 2,
                },
                Requirement::AnyAdditional { slots: 1, hours: 2 },
            ],
        },
    ]
}
