//! The subset of the RxNorm release tables the store reads.

/// Tables and indexes created by [`RxNormStore::create`](crate::RxNormStore::create).
pub(crate) const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS RXNCONSO (
    RXCUI VARCHAR(8) NOT NULL,
    LAT VARCHAR(3) NOT NULL DEFAULT 'ENG',
    RXAUI VARCHAR(8) NOT NULL,
    SAB VARCHAR(20),
    TTY VARCHAR(20) NOT NULL,
    CODE VARCHAR(50),
    STR VARCHAR(3000) NOT NULL
);
CREATE TABLE IF NOT EXISTS RXNREL (
    RXCUI1 VARCHAR(8),
    RXAUI1 VARCHAR(8),
    REL VARCHAR(4),
    RXCUI2 VARCHAR(8),
    RXAUI2 VARCHAR(8),
    RELA VARCHAR(100),
    SAB VARCHAR(20)
);
CREATE TABLE IF NOT EXISTS NDC (
    RXCUI VARCHAR(8) NOT NULL,
    NDC VARCHAR(20) NOT NULL
);
CREATE INDEX IF NOT EXISTS X_RXNCONSO_RXCUI ON RXNCONSO(RXCUI);
CREATE INDEX IF NOT EXISTS X_RXNREL_RXCUI1 ON RXNREL(RXCUI1);
CREATE INDEX IF NOT EXISTS X_NDC_NDC ON NDC(NDC);
";

/// Tables that must exist before a database is usable.
pub(crate) const REQUIRED_TABLES: [&str; 2] = ["RXNCONSO", "RXNREL"];
