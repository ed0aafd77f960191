use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

/// Seeds the static recyclable-item catalog. The catalog is read-only at
/// runtime; ids are assigned by insertion order, starting at 1.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        let sql = r#"
INSERT INTO items (title, image) VALUES
    ('Lâmpadas', 'lampadas.svg'),
    ('Pilhas e Baterias', 'baterias.svg'),
    ('Papéis e Papelão', 'papeis-papelao.svg'),
    ('Resíduos Eletrônicos', 'eletronicos.svg'),
    ('Resíduos Orgânicos', 'organicos.svg'),
    ('Óleo de Cozinha', 'oleo.svg');
        "#;

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared("DELETE FROM items;").await?;
        Ok(())
    }
}
