use dbdef_core::schema::Sequence;
use dbdef_sql::Serializer;
use pretty_assertions::assert_eq;

fn make_sequence(name: &str, props: &[(&str, &str)]) -> Sequence {
    let mut sequence = Sequence::new(name);
    for (key, value) in props {
        sequence.properties.insert(*key, Some(value.to_string()));
    }
    sequence
}

#[test]
fn sequence_with_server_defaults() {
    let sequence = make_sequence("sk_task_lock_handle_id_seq", &[]);

    assert_eq!(
        Serializer::postgresql().sequence(&sequence),
        "CREATE SEQUENCE IF NOT EXISTS public.sk_task_lock_handle_id_seq\n\
         \tNO MINVALUE\n\
         \tNO MAXVALUE\n\
         \tNO CYCLE;\n\n"
    );
}

#[test]
fn sequence_with_every_setting() {
    let sequence = make_sequence(
        "sk_task_lock_handle_id_seq",
        &[
            ("start", "100"),
            ("increment", "2"),
            ("min_value", "1"),
            ("max_value", "9223372036854775807"),
            ("cache", "50"),
            ("cycle", "yes"),
        ],
    );

    assert_eq!(
        Serializer::postgresql().sequence(&sequence),
        "CREATE SEQUENCE IF NOT EXISTS public.sk_task_lock_handle_id_seq\n\
         \tSTART WITH 100\n\
         \tINCREMENT BY 2\n\
         \tMINVALUE 1\n\
         \tMAXVALUE 9223372036854775807\n\
         \tCACHE 50\n\
         \tCYCLE;\n\n"
    );
}
