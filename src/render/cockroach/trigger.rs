//! SQL rendering for triggers

use crate::model::Trigger;

pub fn render_create_trigger(trigger: &Trigger) -> String {
    let mut sql = String::new();
    sql.push_str(&format!("CREATE TRIGGER {}\n", trigger.name));
    sql.push_str(&format!("  {} {}\n", trigger.timing, trigger.event));
    sql.push_str(&format!("  ON {}\n", trigger.table_name()));
    sql.push_str("  FOR EACH ROW\n");
    sql.push_str(&trigger.definition);
    sql.push(';');
    sql
}

pub fn render_drop_trigger(trigger: &Trigger) -> String {
    format!(
        "DROP TRIGGER IF EXISTS {} ON {} CASCADE;",
        trigger.name,
        trigger.table_name()
    )
}
