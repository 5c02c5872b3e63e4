use pretty_assertions::assert_eq;
use std_util::prelude::*;
use strata_core::{
    schema::{ClassDef, Inheritance, PropertyDef},
    stmt::{Type, Value},
    BusinessObject, Capability, Catalog,
};
use strata_sql::{AutoIncrement, Generator, Statement, TypedValue};

fn shape() -> ClassDef {
    ClassDef::new("Shape")
        .table("Shape_table")
        .property(PropertyDef::new("ShapeID").column("ShapeID_field").ty(Type::I32))
        .property(PropertyDef::new("ShapeName"))
        .primary_key(["ShapeID"])
}

fn circle(inheritance: Inheritance) -> ClassDef {
    ClassDef::new("Circle")
        .table("circle_table")
        .property(PropertyDef::new("CircleID").column("CircleID_field").ty(Type::I32))
        .property(PropertyDef::new("Radius").ty(Type::F64))
        .primary_key(["CircleID"])
        .extends("Shape", inheritance)
}

fn new_circle(catalog: &Catalog) -> BusinessObject {
    let mut object = assert_ok!(BusinessObject::new(catalog, catalog.id_of("Circle").unwrap()));
    assert_ok!(object.set("ShapeID", 1));
    assert_ok!(object.set("ShapeName", "round"));
    assert_ok!(object.set("CircleID", 10));
    assert_ok!(object.set("Radius", 2.5));
    object
}

fn sql(statements: &[Statement]) -> Vec<&str> {
    statements.iter().map(|stmt| stmt.sql.as_str()).collect()
}

fn values(statement: &Statement) -> Vec<&Value> {
    statement.params.iter().map(|param| &param.value).collect()
}

#[test]
fn class_table_inheritance_writes_parent_first() {
    let catalog = assert_ok!(Catalog::builder().build(vec![
        shape(),
        circle(Inheritance::ClassTable)
    ]));
    let generator = Generator::new(&catalog, &Capability::MYSQL);

    let statements = assert_ok!(generator.insert(&new_circle(&catalog)));

    assert_eq!(
        sql(&statements),
        [
            "INSERT INTO `Shape_table` (`ShapeID_field`, `ShapeName`) VALUES (?Param0, ?Param1)",
            "INSERT INTO `circle_table` (`CircleID_field`, `Radius`, `ShapeID_field`) VALUES (?Param0, ?Param1, ?Param2)",
        ]
    );

    assert_eq!(statements[0].table, "Shape_table");
    assert_eq!(statements[1].table, "circle_table");
    assert!(statements.iter().all(Statement::is_insert));
    assert!(statements.iter().all(|stmt| stmt.auto_increment.is_none()));

    assert_eq!(
        statements[0].params,
        [
            TypedValue::new(Value::I32(1), Type::I32),
            TypedValue::new(Value::from("round"), Type::String),
        ]
    );
    assert_eq!(
        values(&statements[1]),
        [&Value::I32(10), &Value::F64(2.5), &Value::I32(1)]
    );
}

#[test]
fn single_table_inheritance_writes_one_row() {
    let catalog = assert_ok!(Catalog::builder().build(vec![
        ClassDef::new("Shape")
            .property(PropertyDef::new("ShapeID").ty(Type::I32))
            .property(PropertyDef::new("ShapeName"))
            .primary_key(["ShapeID"]),
        ClassDef::new("Circle")
            .property(PropertyDef::new("Radius").ty(Type::F64))
            .extends("Shape", Inheritance::SingleTable),
    ]));
    let generator = Generator::new(&catalog, &Capability::GENERIC);

    let mut object = assert_ok!(BusinessObject::new(&catalog, catalog.id_of("Circle").unwrap()));
    assert_ok!(object.set("ShapeID", 1));
    assert_ok!(object.set("ShapeName", "round"));
    assert_ok!(object.set("Radius", 2.5));

    let statements = assert_ok!(generator.insert(&object));

    assert_eq!(
        sql(&statements),
        ["INSERT INTO Shape (Radius, ShapeID, ShapeName) VALUES (?Param0, ?Param1, ?Param2)"]
    );
    assert_eq!(statements[0].table, "Shape");
    assert_eq!(
        values(&statements[0]),
        [&Value::F64(2.5), &Value::I32(1), &Value::from("round")]
    );
}

#[test]
fn discriminator_records_the_class() {
    let catalog = assert_ok!(Catalog::builder().build(vec![
        ClassDef::new("Shape")
            .property(PropertyDef::new("ShapeID").ty(Type::I32))
            .primary_key(["ShapeID"]),
        ClassDef::new("Circle")
            .property(PropertyDef::new("Radius").ty(Type::F64))
            .extends("Shape", Inheritance::SingleTable)
            .discriminator("Kind"),
    ]));
    let generator = Generator::new(&catalog, &Capability::POSTGRESQL);

    let object = assert_ok!(BusinessObject::load(
        &catalog,
        catalog.id_of("Circle").unwrap(),
        [("ShapeID", Value::from(4)), ("Radius", Value::from(1.0))],
    ));

    let statements = assert_ok!(generator.insert(&object));

    assert_eq!(
        sql(&statements),
        [r#"INSERT INTO "Shape" ("Radius", "ShapeID", "Kind") VALUES ($1, $2, $3)"#]
    );
    assert_eq!(
        statements[0].params[2],
        TypedValue::new(Value::from("Circle"), Type::String)
    );
}

#[test]
fn concrete_table_holds_inherited_columns() {
    let catalog = assert_ok!(Catalog::builder().build(vec![
        shape(),
        circle(Inheritance::ConcreteTable)
    ]));
    let generator = Generator::new(&catalog, &Capability::GENERIC);

    let statements = assert_ok!(generator.insert(&new_circle(&catalog)));

    assert_eq!(
        sql(&statements),
        ["INSERT INTO circle_table (CircleID_field, Radius, ShapeID_field, ShapeName) VALUES (?Param0, ?Param1, ?Param2, ?Param3)"]
    );
}

#[test]
fn deep_class_table_chain() {
    let catalog = assert_ok!(Catalog::builder().build(vec![
        shape(),
        circle(Inheritance::ClassTable),
        ClassDef::new("FilledCircle")
            .property(PropertyDef::new("Colour"))
            .extends("Circle", Inheritance::ClassTable),
    ]));
    let generator = Generator::new(&catalog, &Capability::GENERIC);

    let mut object = assert_ok!(BusinessObject::new(
        &catalog,
        catalog.id_of("FilledCircle").unwrap()
    ));
    assert_ok!(object.set("ShapeID", 1));
    assert_ok!(object.set("CircleID", 10));
    assert_ok!(object.set("Colour", "red"));

    let statements = assert_ok!(generator.insert(&object));

    let tables: Vec<_> = statements.iter().map(|stmt| stmt.table.as_str()).collect();
    assert_eq!(tables, ["Shape_table", "circle_table", "FilledCircle"]);

    // The grandchild inherits Circle's key and links to it
    assert_eq!(
        statements[2].sql,
        "INSERT INTO FilledCircle (Colour, CircleID_field) VALUES (?Param0, ?Param1)"
    );
    assert_eq!(values(&statements[2]), [&Value::from("red"), &Value::I32(10)]);
}

#[test]
fn auto_increment_is_left_to_the_database() {
    let catalog = assert_ok!(Catalog::builder().build(vec![
        ClassDef::new("Shape")
            .table("Shape_table")
            .property(
                PropertyDef::new("ShapeID")
                    .column("ShapeID_field")
                    .ty(Type::I64)
                    .auto_increment(),
            )
            .property(PropertyDef::new("ShapeName"))
            .primary_key(["ShapeID"]),
        circle(Inheritance::ClassTable),
    ]));
    let generator = Generator::new(&catalog, &Capability::MYSQL);

    let statements = assert_ok!(generator.insert(&new_circle(&catalog)));

    assert_eq!(
        statements[0].sql,
        "INSERT INTO `Shape_table` (`ShapeName`) VALUES (?Param0)"
    );
    assert_eq!(
        statements[0].auto_increment,
        Some(AutoIncrement {
            property: "ShapeID".to_string(),
            column: "ShapeID_field".to_string(),
        })
    );
    assert_none!(statements[1].auto_increment);
}

#[test]
fn value_that_does_not_fit_the_type() {
    let catalog = assert_ok!(Catalog::builder().build(vec![
        shape(),
        circle(Inheritance::ClassTable)
    ]));
    let generator = Generator::new(&catalog, &Capability::GENERIC);

    let mut object = new_circle(&catalog);
    assert_ok!(object.set("Radius", "wide"));

    let err = assert_err!(generator.insert(&object));
    assert!(err.is_invalid_data_type());
    assert!(err
        .to_string()
        .starts_with("inserting `Circle` into `circle_table`: invalid data type: property `Radius`"));
}

#[test]
fn run_root_records_its_own_class() {
    let catalog = assert_ok!(Catalog::builder().build(vec![
        ClassDef::new("Shape")
            .property(PropertyDef::new("ShapeID").ty(Type::I32))
            .primary_key(["ShapeID"]),
        ClassDef::new("Circle")
            .property(PropertyDef::new("Radius").ty(Type::F64))
            .extends("Shape", Inheritance::SingleTable)
            .discriminator("Kind"),
    ]));
    let generator = Generator::new(&catalog, &Capability::GENERIC);

    let mut object = assert_ok!(BusinessObject::new(&catalog, catalog.id_of("Shape").unwrap()));
    assert_ok!(object.set("ShapeID", 5));

    let statements = assert_ok!(generator.insert(&object));

    assert_eq!(
        sql(&statements),
        ["INSERT INTO Shape (ShapeID, Kind) VALUES (?Param0, ?Param1)"]
    );
    assert_eq!(values(&statements[0]), [&Value::I32(5), &Value::from("Shape")]);
}
