/*
 * Responsibility
 * - ドメインロジックの公開インターフェース (re-export)
 */
pub mod status;
pub mod token;
