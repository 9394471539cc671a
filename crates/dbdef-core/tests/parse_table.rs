use dbdef_core::{
    parse::ParserRegistry,
    schema::{ConstraintKind, Object, ObjectType, SortOrder, Table},
    Mapping, Token,
};
use pretty_assertions::assert_eq;

fn parse_table(mapping: &Mapping, src: &str) -> Table {
    match ParserRegistry::new(mapping)
        .parser_for(ObjectType::Table)
        .parse(src)
        .unwrap()
    {
        Object::Table(table) => table,
        other => panic!("expected table, got {other:?}"),
    }
}

#[test]
fn queue_table_with_expanded_constraint() {
    let mapping = Mapping::new().with(Token::QueueTableName, "sk_tasks_queue_t");

    let table = parse_table(
        &mapping,
        "TBL\n\
         NAME:sk_$queue_table_name$\n\
         COL:id(type=bigint;not_null=true)\n\
         CONSTRAINT:pk_sk_$queue_table_name$_id($queue_table_name$_id);type=pk\n",
    );

    assert_eq!(table.name, "sk_sk_tasks_queue_t");
    assert_eq!(table.columns.len(), 1);
    assert_eq!(table.columns[0].name, "id");
    assert_eq!(table.columns[0].ty, "bigint");
    assert!(table.columns[0].not_null);

    let pk = table.primary_key.as_ref().unwrap();
    assert_eq!(pk.name, "pk_sk_sk_tasks_queue_t_id");
    assert_eq!(pk.kind, ConstraintKind::PrimaryKey);
    assert_eq!(
        pk.columns.iter().collect::<Vec<_>>(),
        ["sk_tasks_queue_t_id"]
    );
    assert!(table.is_primary_key_column("sk_tasks_queue_t_id"));
    assert!(!table.is_primary_key_column("id"));
}

#[test]
fn constraint_name_stops_at_the_parenthesis() {
    let mapping = Mapping::new().with(Token::QueueTableName, "sk_tasks_queue_t");

    let table = parse_table(
        &mapping,
        "TBL\n\
         NAME:sk_$queue_table_name$\n\
         CONSTRAINT:pk_sk($queue_table_name$_id);type=pk\n",
    );

    let pk = table.primary_key.as_ref().unwrap();
    assert_eq!(pk.name, "pk_sk");
    assert_eq!(
        pk.columns.iter().collect::<Vec<_>>(),
        ["sk_tasks_queue_t_id"]
    );
}

#[test]
fn column_defaults_and_attributes() {
    let mapping = Mapping::new();
    let table = parse_table(
        &mapping,
        "TBL\n\
         NAME:sk_$metrics_table_name$\n\
         COL:metric_category\n\
         COL:metric_value;type=bigint;not_null=true;default=0\n\
         COL:metric_owner(type=text);description=Owning $queue_table_name$;default='$queue_table_name$'\n\
         COL:metric_flag(type=boolean;not_null=false);not_null=yes\n",
    );

    assert_eq!(table.name, "sk_sk_metrics_t");

    let category = table.column("metric_category").unwrap();
    assert_eq!(category.ty, "character varying(255)");
    assert!(!category.not_null);
    assert_eq!(category.default, None);

    let value = table.column("metric_value").unwrap();
    assert_eq!(value.ty, "bigint");
    assert!(value.not_null);
    assert_eq!(value.default.as_deref(), Some("0"));

    // Only `default` is expanded.
    let owner = table.column("metric_owner").unwrap();
    assert_eq!(owner.default.as_deref(), Some("'sk_tasks_queue_t'"));
    assert_eq!(owner.description.as_deref(), Some("Owning $queue_table_name$"));

    // The properties segment overrides the parenthesised arguments.
    let flag = table.column("metric_flag").unwrap();
    assert!(flag.not_null);
}

#[test]
fn constraint_partitioning_is_order_independent() {
    let mapping = Mapping::new();

    let a = parse_table(
        &mapping,
        "TBL\nNAME:t\nCOL:id\nCOL:key\n\
         CONSTRAINT:pk_t(id);type=pk\n\
         CONSTRAINT:unq_t_key(key);type=unq\n",
    );
    let b = parse_table(
        &mapping,
        "TBL\nNAME:t\nCOL:id\nCOL:key\n\
         CONSTRAINT:unq_t_key(key);type=unq\n\
         CONSTRAINT:pk_t(id);type=pk\n",
    );

    for table in [&a, &b] {
        assert_eq!(table.primary_key.as_ref().unwrap().name, "pk_t");
        assert_eq!(table.unique_keys.len(), 1);
        assert_eq!(table.unique_keys[0].name, "unq_t_key");
        assert!(table.is_unique_key_column("key"));
        assert!(!table.is_unique_key_column("id"));
    }
    assert_eq!(a, b);
}

#[test]
fn last_primary_key_wins() {
    let mapping = Mapping::new();
    let table = parse_table(
        &mapping,
        "TBL\nNAME:t\n\
         CONSTRAINT:pk_first(a);type=pk\n\
         CONSTRAINT:pk_second(b, c);type=pk\n",
    );

    let pk = table.primary_key.unwrap();
    assert_eq!(pk.name, "pk_second");
    assert_eq!(pk.columns.iter().collect::<Vec<_>>(), ["b", "c"]);
}

#[test]
fn unknown_constraint_type() {
    let mapping = Mapping::new();
    let err = ParserRegistry::new(&mapping)
        .parser_for(ObjectType::Table)
        .parse("TBL\nNAME:t\nCONSTRAINT:fk_t(id);type=xyz\n")
        .unwrap_err();

    assert!(err.is_invalid_constraint_type());
    assert!(err.to_string().ends_with("constraint type is of invalid type: xyz"));
}

#[test]
fn missing_constraint_type() {
    let mapping = Mapping::new();
    let err = ParserRegistry::new(&mapping)
        .parser_for(ObjectType::Table)
        .parse("TBL\nNAME:t\nCONSTRAINT:pk_t(id)\n")
        .unwrap_err();

    assert!(err.is_invalid_constraint_type());
    assert_eq!(
        err.to_string(),
        "line `CONSTRAINT:pk_t(id)`: constraint type is mandatory"
    );
}

#[test]
fn indexes() {
    let mapping = Mapping::new();
    let table = parse_table(
        &mapping,
        "TBL\nNAME:$queue_table_name$\n\
         IDX:idx_$queue_table_name$_filter(task_priority=DESC, task_locked_until=asc, task_type)\n\
         IDX:idx_$queue_table_name$_payload(task_payload);type=gin\n",
    );

    assert_eq!(table.indexes.len(), 2);

    let filter = &table.indexes[0];
    assert_eq!(filter.name, "idx_sk_tasks_queue_t_filter");
    assert_eq!(filter.ty, "btree");
    assert_eq!(
        filter.columns.iter().map(|(c, o)| (c.as_str(), *o)).collect::<Vec<_>>(),
        [
            ("task_priority", SortOrder::Desc),
            ("task_locked_until", SortOrder::Asc),
            ("task_type", SortOrder::Asc),
        ]
    );

    assert_eq!(table.indexes[1].ty, "gin");
}

#[test]
fn unknown_sort_order() {
    let mapping = Mapping::new();
    let err = ParserRegistry::new(&mapping)
        .parser_for(ObjectType::Table)
        .parse("TBL\nNAME:t\nIDX:ix(a=sideways)\n")
        .unwrap_err();

    assert!(err.is_invalid_definition());
}

#[test]
fn properties_and_comments() {
    let mapping = Mapping::new();
    let table = parse_table(
        &mapping,
        "# queue table\n\
         TBL\n\
         \n\
         NAME:t\n\
         PROPS:title=Queue;description=Pending tasks\n\
         PROPS:owner=postgres;title=Task Queue\n\
         # COL:ignored\n\
         UNKNOWN:line\n\
         COL:id\n",
    );

    assert_eq!(table.properties.title(), Some("Task Queue"));
    assert_eq!(table.properties.description(), Some("Pending tasks"));
    assert_eq!(
        table.properties.non_meta().collect::<Vec<_>>(),
        [("owner", Some("postgres"))]
    );
    assert_eq!(table.columns.len(), 1);
}

#[test]
fn missing_name_and_discriminator() {
    let mapping = Mapping::new();
    let parser = ParserRegistry::new(&mapping).parser_for(ObjectType::Table);

    let err = parser.parse("TBL\nCOL:id\n").unwrap_err();
    assert_eq!(err.to_string(), "invalid definition: table has no `NAME:` line");

    let err = parser.parse("SEQ\nNAME:t\n").unwrap_err();
    assert!(err.is_invalid_definition());
}
