use ferrum_resource_model::reference::{self, classify, ReferenceKind};
use ferrum_resource_model::traversal::{count_mid_level, flatten};
use ferrum_resource_model::{
    CarePlan, Conformance, DataValue, DomainResource, Element, Error, ExtensionStore, FhirBoolean,
    FhirDateTime, FhirString, ImagingStudy, ImagingStudySeries, ImagingStudySeriesInstance,
    Patient, Resource, ResourceEntry, ResourceReference, ResourceType, TypedResourceEntry,
};
use serde_json::json;

const EXT_TEST: &str = "http://fhir.org/ext/ext-test";
const EXT_TEST2: &str = "http://fhir.org/ext/ext-test2";

#[test]
fn date_time_handling() {
    let dt = FhirDateTime::new("2010-01-01");
    assert_eq!(dt.as_str(), Some("2010-01-01"));

    let dt2 = FhirDateTime::from_parts(1972, 11, 30, 15, 10).unwrap();
    assert!(dt2.as_str().unwrap().starts_with("1972-11-30T15:10"));
}

#[test]
fn simple_value_support() {
    let mut c = Conformance::new();

    assert!(c.accept_unknown().is_none());
    c.set_accept_unknown(Some(true));
    assert_eq!(c.accept_unknown(), Some(true));
    assert!(c.accept_unknown.is_some());

    c.publisher = Some(FhirString::new("Furore"));
    assert_eq!(c.publisher(), Some("Furore"));
    c.set_publisher(None::<&str>);
    assert!(c.publisher.is_none());
    c.set_publisher(Some("Furore"));
    assert!(c.publisher.is_some());

    c.set_format(Some(["json", "xml"]));
    let formats = c.format.as_ref().unwrap();
    assert_eq!(formats.len(), 2);
    assert_eq!(formats[0].as_str(), Some("json"));

    c.format = Some(Vec::new());
    c.format.as_mut().unwrap().push(FhirString::new("csv"));
    assert_eq!(c.format().map(|f| f.len()), Some(1));
}

#[test]
fn extension_management() {
    let mut p = Patient::new();
    assert!(p.get_extension(EXT_TEST).is_none());

    let created: *const _ = p.set_extension(EXT_TEST, FhirBoolean::new(true));
    assert!(std::ptr::eq(created, p.extension(EXT_TEST).unwrap()));

    p.add_extension(EXT_TEST2, FhirString::new("Ewout"));
    assert!(std::ptr::eq(created, p.extension(EXT_TEST).unwrap()));

    p.remove_extension(EXT_TEST);
    assert!(p.get_extension(EXT_TEST).is_none());

    p.set_extension(EXT_TEST2, FhirString::new("Ewout Kramer"));
    assert_eq!(p.get_extensions(EXT_TEST2).len(), 1);

    p.add_extension(EXT_TEST2, FhirString::new("Wouter Kramer"));
    let names: Vec<&str> = p
        .get_extensions(EXT_TEST2)
        .into_iter()
        .filter_map(DataValue::as_str)
        .collect();
    assert_eq!(names, vec!["Ewout Kramer", "Wouter Kramer"]);
}

#[test]
fn extensions_on_resource_handle() {
    let mut resource: Resource = CarePlan::default().into();
    resource.add_extension(EXT_TEST, 1);
    resource.add_extension(EXT_TEST, 2);

    let care_plan = resource.downcast_ref::<CarePlan>().unwrap();
    assert_eq!(care_plan.get_extensions(EXT_TEST).len(), 2);
}

#[test]
fn recognize_contained_reference() {
    let mut rref = ResourceReference::new("#patient2223432");
    assert!(rref.is_contained_reference());

    rref.reference = Some("http://somewhere.nl/Patient/1".to_string());
    assert!(!rref.is_contained_reference());

    rref.reference = Some("Patient/1".to_string());
    assert!(!rref.is_contained_reference());

    assert_eq!(classify("#patient2223432"), ReferenceKind::Contained);
    assert_eq!(classify("http://example.org/Patient/1"), ReferenceKind::External);
}

#[test]
fn find_contained_resource() {
    let mut pat = Patient::new();
    pat.contained = Some(vec![
        Patient::with_id("pat1").into(),
        Patient::with_id("pat2").into(),
    ]);

    let mut rref = ResourceReference::new("#pat2");
    let found = pat.find_contained_resource(&rref).unwrap();
    assert_eq!(found.id(), Some("pat2"));
    assert!(std::ptr::eq(found, &pat.contained.as_ref().unwrap()[1]));
    assert!(pat.find_contained_resource(rref.url().unwrap()).is_some());

    rref.reference = Some("#pat3".to_string());
    assert!(pat.find_contained_resource(&rref).is_none());
}

#[test]
fn resolve_from_deserialized_tree() {
    let root = Resource::from_value(&json!({
        "resourceType": "CarePlan",
        "id": "cp",
        "contained": [
            { "resourceType": "Patient", "id": "pat1" },
            { "resourceType": "Patient", "id": "pat2", "active": { "value": true } }
        ],
        "patient": { "reference": "#pat2" }
    }))
    .unwrap();

    let care_plan = root.downcast_ref::<CarePlan>().unwrap();
    let subject = care_plan.patient.as_ref().unwrap();
    let patient: &Patient = reference::resolve_as(care_plan, subject).unwrap();
    assert_eq!(patient.active.as_ref().and_then(|a| a.value), Some(true));
}

#[test]
fn typed_resource_entry() {
    let mut pe = TypedResourceEntry::<Patient>::new();
    pe.set_resource(Patient::new());

    let e: &mut ResourceEntry = &mut pe;
    assert_eq!(e.resource_type(), Some(ResourceType::Patient));

    e.resource = Some(CarePlan::default().into());

    match pe.resource() {
        Err(Error::TypeMismatch { expected, actual }) => {
            assert_eq!(expected, ResourceType::Patient);
            assert_eq!(actual, ResourceType::CarePlan);
        }
        other => panic!("should have failed with a type mismatch, got {other:?}"),
    }

    pe.set_untyped_resource(Patient::with_id("back"));
    assert_eq!(pe.resource().unwrap().unwrap().id(), Some("back"));
}

#[test]
fn select_instances_and_series() {
    let mut serie_a1 = ImagingStudySeries::default();
    for uid in ["a11", "a12", "a13"] {
        serie_a1.add_instance(ImagingStudySeriesInstance::with_uid(uid));
    }
    let serie_a2 = ImagingStudySeries::default();

    let mut study_a = ImagingStudy::default();
    study_a.add_series(serie_a1);
    study_a.add_series(serie_a2);

    let study_b = ImagingStudy {
        series: None,
        ..Default::default()
    };

    let studies = vec![study_a, study_b];
    assert_eq!(ImagingStudy::list_instances(&studies).count(), 3);
    assert_eq!(ImagingStudy::list_series(&studies).count(), 2);
}

#[test]
fn flatten_with_absent_mid_level() {
    let mut series = ImagingStudySeries::default();
    for uid in ["x1", "x2", "x3"] {
        series.add_instance(ImagingStudySeriesInstance::with_uid(uid));
    }
    let mut study_a = ImagingStudy::default();
    study_a.add_series(series);
    let study_b = ImagingStudy::default();
    let studies = [study_a, study_b];

    let leaves = flatten(
        &studies,
        |s| s.series.as_deref(),
        |s| s.instance.as_deref(),
    );
    assert_eq!(leaves.count(), 3);
    assert_eq!(count_mid_level(&studies, |s| s.series.as_deref()), 1);
}

#[test]
fn descriptors_expose_simple_fields() {
    let resource: Resource = Conformance::new().into();
    let descriptor = resource.descriptor();
    assert_eq!(descriptor.name, "Conformance");
    assert!(descriptor.simple_fields().any(|f| f.name == "acceptUnknown"));
    assert!(descriptor.simple_fields().all(|f| f.is_simple()));

    let patient = ResourceType::Patient.descriptor();
    assert!(!patient.field("managingOrganization").unwrap().is_simple());
}
