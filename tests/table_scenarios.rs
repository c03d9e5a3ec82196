//! Módulo para los casos de uso de una tabla: crearla, insertar y consultar.

mod common;

use {
    common::users_table,
    schema::{
        data_types::{native_function::NativeFunctionCall, native_types::NativeType, value::Value},
        errors::error::Error,
        params,
        statements::{
            ddl_statement::keyspace::create_keyspace, dml_statement::select::Selection,
        },
        table::TableHandle,
        table_metadata::{
            column_definition::ColumnDefinition,
            ordering::{ClusteringOrder, Ordering},
            table_schema::TableSchema,
        },
    },
};

#[test]
fn test_1_tabla_con_partition_key_simple() {
    let table = users_table();
    assert!(table.is_ok());

    if let Ok(table) = table {
        let res = table.create();
        assert!(res.is_ok());

        if let Ok(statement) = res {
            assert!(statement.cql.contains("PRIMARY KEY(id)"));
            assert!(!statement.cql.contains("CLUSTERING ORDER BY"));
            assert!(statement.values.is_empty());
        }
    }
}

#[test]
fn test_2_orden_de_clustering_mixto() {
    let table = TableHandle::new(
        "events",
        TableSchema::builder()
            .column("id", ColumnDefinition::new(NativeType::Int).partition_key())
            .column(
                "colA",
                ColumnDefinition::new(NativeType::Timestamp).clustering(Ordering::Asc),
            )
            .column(
                "colB",
                ColumnDefinition::new(NativeType::Int).clustering(ClusteringOrder::Indexed {
                    index: 0,
                    order: Ordering::Desc,
                }),
            )
            .column(
                "colC",
                ColumnDefinition::new(NativeType::Text).clustering(ClusteringOrder::Indexed {
                    index: 1,
                    order: Ordering::Desc,
                }),
            )
            .build(),
    );
    assert!(table.is_ok());

    if let Ok(table) = table {
        assert_eq!(
            table.create().map(|statement| statement.cql),
            Ok("CREATE TABLE events (id int, colA timestamp, colB int, colC text, PRIMARY KEY(id, colB, colC, colA)) WITH CLUSTERING ORDER BY (colB DESC, colC DESC, colA ASC);".to_string())
        );
    }
}

#[test]
fn test_3_insert_con_now() {
    let table = users_table();
    assert!(table.is_ok());

    if let Ok(table) = table {
        let res = table.insert(&["id", "name"], params![NativeFunctionCall::now(), "hello"]);
        assert!(res.is_ok());

        if let Ok(statement) = res {
            assert!(statement.cql.ends_with("VALUES ( now(), ? );"));
            assert_eq!(statement.values, vec![Value::from("hello")]);
        }
    }
}

#[test]
fn test_4_tabla_sin_partition_key() {
    let table = TableHandle::new(
        "nameless",
        TableSchema::builder()
            .column("name", ColumnDefinition::new(NativeType::Text))
            .build(),
    );
    assert!(table.is_ok());

    if let Ok(table) = table {
        assert!(matches!(
            table.create(),
            Err(Error::InvalidSchema(name, _, _)) if name == "nameless"
        ));
        assert!(matches!(
            table.create_if_not_exists(),
            Err(Error::InvalidSchema(_, _, _))
        ));
    }
}

#[test]
fn test_5_flujo_completo_en_un_keyspace() {
    let keyspace = create_keyspace("app", 3);
    assert_eq!(
        keyspace.cql,
        "CREATE KEYSPACE IF NOT EXISTS app WITH replication = {'class': 'SimpleStrategy', 'replication_factor' : 3};"
    );

    let table = TableHandle::new(
        "app.users",
        TableSchema::builder()
            .column("id", ColumnDefinition::new(NativeType::Uuid).partition_key())
            .column("name", ColumnDefinition::new(NativeType::Text))
            .column("visits", ColumnDefinition::new(NativeType::BigInt).nullable())
            .build(),
    );
    assert!(table.is_ok());

    if let Ok(table) = table {
        let create = table.create_if_not_exists();
        assert!(matches!(create, Ok(ref s) if s.cql.starts_with("CREATE TABLE IF NOT EXISTS app.users (")));

        let insert = table.insert(
            &["id", "name", "visits"],
            params![NativeFunctionCall::uuid(), "ana", 1],
        );
        assert_eq!(
            insert.map(|s| (s.cql, s.values)),
            Ok((
                "INSERT INTO app.users (id, name, visits) VALUES ( uuid(), ?, ? );".to_string(),
                vec![Value::from("ana"), Value::Int(1)]
            ))
        );

        let update = table.update(&["visits"], &["id"], params![None::<i64>, Value::Uuid(9)]);
        assert_eq!(
            update.map(|s| s.values),
            Ok(vec![Value::Null, Value::Uuid(9)])
        );

        let select = table.select(&Selection::columns(&["name", "visits"]), &["id"], params![Value::Uuid(9)], false);
        assert_eq!(
            select.map(|s| s.cql),
            Ok("SELECT name, visits FROM app.users WHERE (id = ?);".to_string())
        );

        assert_eq!(table.drop_if_exists().cql, "DROP TABLE IF EXISTS app.users;");
    }
}

#[test]
fn test_6_la_tabla_se_comparte_entre_hilos() {
    let table = users_table();
    assert!(table.is_ok());

    if let Ok(table) = table {
        let table = std::sync::Arc::new(table);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let table = std::sync::Arc::clone(&table);
                std::thread::spawn(move || {
                    table.insert(&["id", "name"], params![NativeFunctionCall::now(), format!("user{}", i)])
                })
            })
            .collect();

        for handle in handles {
            let res = handle.join();
            assert!(matches!(res, Ok(Ok(_))));
        }
    }
}
