//! First-run sample encyclopedia content.
//!
//! # Responsibility
//! - Populate an empty `topics` table with the bundled starter dataset.
//!
//! # Invariants
//! - Seeding only runs against an empty table; calling it again is a no-op.
//! - All inserts happen in one transaction, so a failed seed leaves the
//!   table empty rather than half-filled.

use crate::db::DbResult;
use log::info;
use rusqlite::{params, Connection, Transaction};

struct SeedTopic {
    name: &'static str,
    description: &'static str,
    children: &'static [SeedTopic],
}

/// Inserts the starter dataset when the `topics` table is empty.
///
/// Returns the number of topics inserted; `0` means the table already had
/// content and nothing was touched.
pub fn ensure_seed_data(conn: &mut Connection) -> DbResult<u64> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM topics;", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    let mut inserted = 0u64;
    for topic in SAMPLE_TOPICS {
        insert_subtree(&tx, topic, None, &mut inserted)?;
    }
    tx.commit()?;

    info!("event=seed_topics module=db status=ok inserted={inserted}");
    Ok(inserted)
}

fn insert_subtree(
    tx: &Transaction<'_>,
    topic: &SeedTopic,
    parent_id: Option<i64>,
    inserted: &mut u64,
) -> DbResult<()> {
    tx.execute(
        "INSERT INTO topics (parent_id, name, description) VALUES (?1, ?2, ?3);",
        params![parent_id, topic.name, topic.description],
    )?;
    let id = tx.last_insert_rowid();
    *inserted += 1;

    for child in topic.children {
        insert_subtree(tx, child, Some(id), inserted)?;
    }
    Ok(())
}

const SAMPLE_TOPICS: &[SeedTopic] = &[
    SeedTopic {
        name: "Terminology",
        description: "Core anatomical and clinical vocabulary that defines spatial relationships and common language in healthcare.",
        children: &[
            SeedTopic {
                name: "Directions",
                description: "Directional terms describe the location of structures relative to one another.",
                children: &[
                    SeedTopic {
                        name: "Anterior (ventral)",
                        description: "Toward the front surface of the body; often used interchangeably with ventral in human anatomy.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Posterior (dorsal)",
                        description: "Toward the back surface of the body, opposite of anterior.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Superior (cranial)",
                        description: "Toward the head or upper part of the body; indicates a position above another structure.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Inferior (caudal)",
                        description: "Toward the feet or lower part of the body; indicates a position below another structure.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Medial",
                        description: "Closer to the median plane of the body or a structure.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Lateral",
                        description: "Farther from the median plane of the body or a structure.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Proximal",
                        description: "Closer to the point of origin or attachment; frequently used when discussing limbs.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Distal",
                        description: "Farther from the point of origin or attachment; opposite of proximal.",
                        children: &[],
                    },
                ],
            },
            SeedTopic {
                name: "Anatomical Regions",
                description: "Named body regions provide consistent reference points for examinations and procedures.",
                children: &[
                    SeedTopic {
                        name: "Ventral Cavity",
                        description: "The anterior body cavity that houses thoracic, abdominal, and pelvic organs.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Dorsal Cavity",
                        description: "Posterior body cavity containing the cranial and vertebral spaces.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Quadrants",
                        description: "Abdominal surface divided into right/left upper and lower quadrants for assessment.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Surface Landmarks",
                        description: "External anatomical markers such as the sternal angle and iliac crest used for orientation.",
                        children: &[],
                    },
                ],
            },
            SeedTopic {
                name: "Clinical Abbreviations",
                description: "Shortened forms and acronyms commonly encountered in clinical documentation.",
                children: &[
                    SeedTopic {
                        name: "PRN",
                        description: "Pro re nata; indicates a medication is given as needed based on patient symptoms.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "NPO",
                        description: "Nil per os; instructs that the patient should refrain from oral intake.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Stat",
                        description: "Immediately; denotes urgency in orders and interventions.",
                        children: &[],
                    },
                ],
            },
        ],
    },
    SeedTopic {
        name: "Cellular Biology",
        description: "Foundational processes that govern cell structure, function, and replication.",
        children: &[
            SeedTopic {
                name: "Cell Cycle",
                description: "A regulated sequence of growth (G1), DNA synthesis (S), preparation for mitosis (G2), and division (M). Checkpoints ensure fidelity.",
                children: &[
                    SeedTopic {
                        name: "G1 Phase",
                        description: "Cell grows, produces organelles, and monitors the environment before committing to DNA replication.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "S Phase",
                        description: "DNA replication occurs, producing identical sister chromatids for each chromosome.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "G2 Phase",
                        description: "Cell continues to grow and synthesizes proteins required for mitosis; DNA is checked for damage.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "M Phase",
                        description: "Mitosis and cytokinesis separate duplicated chromosomes and divide the cytoplasm into two daughter cells.",
                        children: &[],
                    },
                ],
            },
            SeedTopic {
                name: "Organelles",
                description: "Membrane-bound structures with specialized functions essential to cell physiology.",
                children: &[
                    SeedTopic {
                        name: "Mitochondria",
                        description: "Powerhouses of the cell generating ATP through oxidative phosphorylation; contain their own DNA.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Endoplasmic Reticulum",
                        description: "Network responsible for protein synthesis (rough ER) and lipid metabolism (smooth ER).",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Golgi Apparatus",
                        description: "Modifies, sorts, and packages proteins and lipids for secretion or delivery to organelles.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Lysosomes",
                        description: "Acidic vesicles containing hydrolytic enzymes for intracellular digestion and recycling.",
                        children: &[],
                    },
                ],
            },
            SeedTopic {
                name: "Cell Signaling",
                description: "Communication pathways that allow cells to sense and respond to their environment.",
                children: &[
                    SeedTopic {
                        name: "Autocrine",
                        description: "Signals released and received by the same cell, often regulating growth.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Paracrine",
                        description: "Signals travel short distances to nearby cells to coordinate local responses.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Endocrine",
                        description: "Hormones enter the bloodstream to influence distant target cells.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Second Messengers",
                        description: "Intracellular signaling molecules such as cAMP and calcium that amplify receptor activation.",
                        children: &[],
                    },
                ],
            },
        ],
    },
    SeedTopic {
        name: "Clinical Skills",
        description: "Practical competencies that underpin patient assessment and care delivery.",
        children: &[
            SeedTopic {
                name: "History Taking",
                description: "Structured approach to gathering subjective information including chief complaint, history of present illness, and review of systems.",
                children: &[],
            },
            SeedTopic {
                name: "Physical Examination",
                description: "Systematic evaluation of the body using inspection, palpation, percussion, and auscultation.",
                children: &[
                    SeedTopic {
                        name: "Cardiovascular Exam",
                        description: "Assessment of heart sounds, jugular venous pressure, and peripheral pulses to evaluate cardiac function.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Respiratory Exam",
                        description: "Evaluation of breathing patterns, lung sounds, and percussion tones to detect pulmonary pathology.",
                        children: &[],
                    },
                    SeedTopic {
                        name: "Neurologic Exam",
                        description: "Series of tests assessing cranial nerves, motor function, sensation, reflexes, and coordination.",
                        children: &[],
                    },
                ],
            },
            SeedTopic {
                name: "Procedural Basics",
                description: "Essential bedside skills such as venipuncture, arterial line placement, and basic suturing.",
                children: &[],
            },
        ],
    },
];
