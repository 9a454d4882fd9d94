//! Baseline row seeding.
//!
//! Seed rows carry fixed primary keys and are inserted with
//! `ON CONFLICT DO NOTHING`, so the whole pass is safe to run
//! unconditionally: a re-run inserts nothing and still reports success.
//! After the inserts, serial sequences are realigned past the fixed keys
//! so subsequent application inserts do not collide with them.

use crate::db::executor::{execute_statement, ExecutionResult};
use crate::db::DbPool;

/// Conflict-ignoring baseline inserts, in the same dependency order as the
/// schema definition.
const SEED_STATEMENTS: &[&str] = &[
    "INSERT INTO schools (id, name, address, phone, email) VALUES
        (1, 'Escola Municipal Monteiro Lobato', 'Rua das Acacias, 120', '(11) 3456-7001', 'contato@emlobato.edu.br'),
        (2, 'Colegio Estadual Cecilia Meireles', 'Av. Brasil, 2040', '(11) 3456-7002', 'secretaria@cemeireles.edu.br')
     ON CONFLICT (id) DO NOTHING",
    "INSERT INTO teachers (id, school_id, name, email, subject) VALUES
        (1, 1, 'Ana Souza', 'ana.souza@emlobato.edu.br', 'Matematica'),
        (2, 1, 'Carlos Lima', 'carlos.lima@emlobato.edu.br', 'Portugues'),
        (3, 2, 'Beatriz Ramos', 'beatriz.ramos@cemeireles.edu.br', 'Historia')
     ON CONFLICT (id) DO NOTHING",
    "INSERT INTO classes (id, school_id, teacher_id, name, school_year) VALUES
        (1, 1, 1, '5o Ano A', 2025),
        (2, 1, 2, '5o Ano B', 2025),
        (3, 2, 3, '8o Ano A', 2025)
     ON CONFLICT (id) DO NOTHING",
    "INSERT INTO students (id, school_id, name, birth_date, guardian_name) VALUES
        (1, 1, 'Joao Pedro Alves', '2014-03-11', 'Mariana Alves'),
        (2, 1, 'Larissa Costa', '2014-08-02', 'Renato Costa'),
        (3, 2, 'Gabriel Martins', '2011-05-27', 'Fernanda Martins')
     ON CONFLICT (id) DO NOTHING",
    "INSERT INTO enrollments (id, student_id, class_id, status) VALUES
        (1, 1, 1, 'active'),
        (2, 2, 1, 'active'),
        (3, 3, 3, 'active')
     ON CONFLICT (id) DO NOTHING",
    "INSERT INTO app_setting (key, value) VALUES
        ('offline_mode', 'false'::jsonb)
     ON CONFLICT (key) DO NOTHING",
];

/// Serial-sequence realignment after the fixed-key inserts.
const SEQUENCE_ALIGNMENTS: &[&str] = &[
    "SELECT setval(pg_get_serial_sequence('schools', 'id'), GREATEST((SELECT COALESCE(MAX(id), 1) FROM schools), 1))",
    "SELECT setval(pg_get_serial_sequence('teachers', 'id'), GREATEST((SELECT COALESCE(MAX(id), 1) FROM teachers), 1))",
    "SELECT setval(pg_get_serial_sequence('classes', 'id'), GREATEST((SELECT COALESCE(MAX(id), 1) FROM classes), 1))",
    "SELECT setval(pg_get_serial_sequence('students', 'id'), GREATEST((SELECT COALESCE(MAX(id), 1) FROM students), 1))",
    "SELECT setval(pg_get_serial_sequence('enrollments', 'id'), GREATEST((SELECT COALESCE(MAX(id), 1) FROM enrollments), 1))",
];

/// Insert baseline rows into every seeded table.
///
/// Stops at the first failing statement and surfaces that failure.
/// Safe to call unconditionally.
pub async fn seed_database(pool: &DbPool) -> ExecutionResult {
    for sql in SEED_STATEMENTS.iter().chain(SEQUENCE_ALIGNMENTS) {
        let result = execute_statement(pool, sql).await;
        if !result.success {
            return result;
        }
    }

    tracing::info!(statements = SEED_STATEMENTS.len(), "Seeding complete");
    ExecutionResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::SCHEMA;

    #[test]
    fn test_every_insert_is_conflict_ignoring() {
        for sql in SEED_STATEMENTS {
            assert!(
                sql.contains("ON CONFLICT") && sql.contains("DO NOTHING"),
                "seed statement is not conflict-ignoring: {}",
                sql
            );
        }
    }

    #[test]
    fn test_seeds_target_known_tables() {
        let known: Vec<&str> = SCHEMA.iter().map(|t| t.name).collect();
        for sql in SEED_STATEMENTS {
            let target = sql
                .trim_start()
                .strip_prefix("INSERT INTO ")
                .and_then(|rest| rest.split_whitespace().next())
                .expect("seed statement is an INSERT");
            assert!(known.contains(&target), "unknown seed target: {}", target);
        }
    }

    #[test]
    fn test_sequence_alignment_covers_serial_tables() {
        // app_setting is keyed by name, every other table is BIGSERIAL.
        assert_eq!(SEQUENCE_ALIGNMENTS.len(), SCHEMA.len() - 1);
        for sql in SEQUENCE_ALIGNMENTS {
            assert!(sql.contains("pg_get_serial_sequence"));
        }
    }
}
