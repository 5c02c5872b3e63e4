use std_util::prelude::*;
use strata_core::{
    schema::{ClassDef, ClassDefinition, ClassId, Inheritance, PropertyDef, SuperClass},
    Catalog,
};

fn property(name: &str) -> PropertyDef {
    PropertyDef::new(name)
}

/// Shape <- Circle <- FilledCircle, linked with `inheritance` at every level.
fn shapes(inheritance: Inheritance) -> Catalog {
    let defs = vec![
        ClassDef::new("Shape")
            .property(property("ShapeID"))
            .property(property("ShapeName"))
            .primary_key(["ShapeID"]),
        ClassDef::new("Circle")
            .property(property("CircleID"))
            .property(property("Radius"))
            .primary_key(["CircleID"])
            .extends("Shape", inheritance),
        ClassDef::new("FilledCircle")
            .property(property("FilledCircleID"))
            .property(property("Colour"))
            .primary_key(["FilledCircleID"])
            .extends("Circle", inheritance),
    ];

    assert_ok!(Catalog::builder().build(defs))
}

fn id(catalog: &Catalog, name: &str) -> ClassId {
    catalog.id_of(name).unwrap()
}

#[test]
fn chain_is_leaf_first() {
    let catalog = shapes(Inheritance::ClassTable);
    let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, "FilledCircle")));

    let names: Vec<_> = hierarchy.layers().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["FilledCircle", "Circle", "Shape"]);
    assert_eq!(hierarchy.leaf().name, "FilledCircle");
    assert_eq!(hierarchy.root().name, "Shape");
    assert_eq!(hierarchy.inheritance(0), Some(Inheritance::ClassTable));
    assert_eq!(hierarchy.inheritance(2), None);
}

#[test]
fn root_class_has_a_single_layer() {
    let catalog = shapes(Inheritance::ClassTable);
    let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, "Shape")));

    assert_eq!(hierarchy.len(), 1);
    assert_eq!(hierarchy.table_for("ShapeName"), Some("Shape"));
    assert_none!(hierarchy.table_for("Radius"));
}

#[test]
fn class_table_properties_stay_in_their_declaring_table() {
    let catalog = shapes(Inheritance::ClassTable);
    let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, "FilledCircle")));

    assert_eq!(hierarchy.table_for("Colour"), Some("FilledCircle"));
    assert_eq!(hierarchy.table_for("Radius"), Some("Circle"));
    assert_eq!(hierarchy.table_for("ShapeName"), Some("Shape"));
}

#[test]
fn single_table_run_collapses_onto_its_root() {
    let catalog = shapes(Inheritance::SingleTable);
    let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, "FilledCircle")));

    for property in ["Colour", "Radius", "CircleID", "ShapeID", "ShapeName"] {
        assert_eq!(hierarchy.table_for(property), Some("Shape"), "{property}");
    }

    assert_eq!(hierarchy.physical_table(0), "Shape");
    assert_eq!(hierarchy.table_layers().len(), 1);
}

#[test]
fn concrete_table_owns_inherited_properties() {
    let defs = vec![
        ClassDef::new("Shape")
            .property(property("ShapeID"))
            .property(property("ShapeName"))
            .primary_key(["ShapeID"]),
        ClassDef::new("Circle")
            .property(property("Radius"))
            .extends("Shape", Inheritance::ConcreteTable),
        ClassDef::new("FilledCircle")
            .property(property("Colour"))
            .extends("Circle", Inheritance::ClassTable),
    ];
    let catalog = assert_ok!(Catalog::builder().build(defs));

    let circle = assert_ok!(catalog.hierarchy(id(&catalog, "Circle")));
    assert_eq!(circle.table_for("ShapeName"), Some("Circle"));
    assert_eq!(circle.table_for("Radius"), Some("Circle"));

    // The class-table subclass keeps its own column, the rest stops at the
    // concrete layer.
    let filled = assert_ok!(catalog.hierarchy(id(&catalog, "FilledCircle")));
    assert_eq!(filled.table_for("Colour"), Some("FilledCircle"));
    assert_eq!(filled.table_for("ShapeID"), Some("Circle"));

    let tables: Vec<_> = filled
        .table_layers()
        .iter()
        .map(|layer| layer.owner.name.as_str())
        .collect();
    assert_eq!(tables, ["FilledCircle", "Circle"]);
}

#[test]
fn single_table_run_below_class_table_parent() {
    let defs = vec![
        ClassDef::new("Entity")
            .property(property("EntityID"))
            .primary_key(["EntityID"]),
        ClassDef::new("Shape")
            .property(property("ShapeName"))
            .extends("Entity", Inheritance::ClassTable),
        ClassDef::new("Circle")
            .property(property("Radius"))
            .extends("Shape", Inheritance::SingleTable)
            .discriminator("Kind"),
    ];
    let catalog = assert_ok!(Catalog::builder().build(defs));
    let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, "Circle")));

    assert_eq!(hierarchy.table_for("Radius"), Some("Shape"));
    assert_eq!(hierarchy.table_for("ShapeName"), Some("Shape"));
    assert_eq!(hierarchy.table_for("EntityID"), Some("Entity"));

    let layers = hierarchy.table_layers();
    assert_eq!(layers.len(), 2);

    assert_eq!(layers[0].class.name, "Circle");
    assert_eq!(layers[0].owner.name, "Shape");
    assert_eq!(layers[0].parent.map(|c| c.name.as_str()), Some("Entity"));
    assert_eq!(layers[0].discriminator, Some("Kind"));

    assert_eq!(layers[1].owner.name, "Entity");
    assert!(layers[1].parent.is_none());
    assert_none!(layers[1].discriminator);
}

#[test]
fn run_root_sees_discriminator_of_its_subclasses() {
    let catalog = assert_ok!(Catalog::builder().build(vec![
        ClassDef::new("Shape")
            .property(property("ShapeID"))
            .primary_key(["ShapeID"]),
        ClassDef::new("Circle")
            .property(property("Radius"))
            .extends("Shape", Inheritance::SingleTable)
            .discriminator("Kind"),
        ClassDef::new("Square")
            .property(property("Side"))
            .extends("Shape", Inheritance::SingleTable),
    ]));

    for name in ["Shape", "Square"] {
        let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, name)));
        let layers = hierarchy.table_layers();

        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].class.name, name);
        assert_eq!(layers[0].discriminator, Some("Kind"));
    }
}

#[test]
fn subclass_definition_shadows_ancestor() {
    let defs = vec![
        ClassDef::new("Shape")
            .property(property("ShapeID"))
            .property(PropertyDef::new("Label").column("shape_label"))
            .primary_key(["ShapeID"]),
        ClassDef::new("Circle")
            .property(PropertyDef::new("Label").column("circle_label"))
            .extends("Shape", Inheritance::ClassTable),
    ];
    let catalog = assert_ok!(Catalog::builder().build(defs));
    let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, "Circle")));

    assert_eq!(hierarchy.table_for("Label"), Some("Circle"));
    assert_eq!(hierarchy.property("Label").unwrap().column, "circle_label");
    assert_eq!(hierarchy.properties().len(), 2);
}

#[test]
fn resolution_is_case_sensitive_and_idempotent() {
    let catalog = shapes(Inheritance::ClassTable);
    let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, "Circle")));

    assert_none!(hierarchy.table_for("radius"));
    assert_eq!(hierarchy.table_for("Radius"), hierarchy.table_for("Radius"));
}

#[test]
fn unknown_property_fails_to_resolve() {
    let catalog = shapes(Inheritance::ClassTable);
    let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, "Circle")));

    let err = assert_err!(hierarchy.resolve_table("Colour"));
    assert!(err.is_property_resolution());
    assert_eq!(
        err.to_string(),
        "property `Colour` not found in the hierarchy of class `Circle`"
    );
}

#[test]
fn primary_key_is_inherited_from_nearest_ancestor() {
    let defs = vec![
        ClassDef::new("Shape")
            .property(property("ShapeID"))
            .primary_key(["ShapeID"]),
        ClassDef::new("Circle")
            .property(property("Radius"))
            .extends("Shape", Inheritance::ClassTable),
    ];
    let catalog = assert_ok!(Catalog::builder().build(defs));
    let hierarchy = assert_ok!(catalog.hierarchy(id(&catalog, "Circle")));

    let pk = assert_ok!(hierarchy.primary_key_properties(0));
    let names: Vec<_> = pk.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["ShapeID"]);
}

#[test]
fn cycle_is_a_configuration_error() {
    // The builder rejects cycles, so assemble the catalog by hand.
    let mut catalog = Catalog::default();

    for (index, (name, parent)) in [("A", 1), ("B", 0)].into_iter().enumerate() {
        let id = ClassId(index);
        catalog.classes.insert(
            id,
            ClassDefinition {
                id,
                name: name.to_string(),
                table_name: name.to_string(),
                properties: vec![],
                primary_key: None,
                super_class: Some(SuperClass {
                    class: ClassId(parent),
                    inheritance: Inheritance::ClassTable,
                    discriminator: None,
                }),
            },
        );
    }

    let err = assert_err!(catalog.hierarchy(ClassId(0)));
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "invalid configuration: superclass chain of `A` loops back to `A`"
    );
}
