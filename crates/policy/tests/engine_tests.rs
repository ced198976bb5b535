//! Engine entry points, fault phrasing, caching and configuration loading

mod common;

use common::{context, engine, script_of, FakeRegion};
use scriptgate_config::{ConfigLoader, ConfigSource, MapConfigSource};
use scriptgate_core::Identity;
use scriptgate_policy::{Denial, Grants, PolicyEngine, ScriptFault, ThreatLevel};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Source that counts how often each override is read
struct CountingSource {
    inner: MapConfigSource,
    reads: AtomicUsize,
}

impl ConfigSource for CountingSource {
    fn get_string(&self, key: &str) -> Option<String> {
        if key.starts_with("Allow_") || key.starts_with("Creators_") {
            self.reads.fetch_add(1, Ordering::SeqCst);
        }
        self.inner.get_string(key)
    }
}

#[test]
fn test_threshold_denial_cites_both_levels() {
    scriptgate_utils::init_for_tests();
    let engine = engine(MapConfigSource::new().with("OSFunctionThreatLevel", "Low"));
    let region = FakeRegion::new();
    let (host, item) = script_of(Identity::random());

    let fault = engine
        .ensure_authorized("X", ThreatLevel::High, &context(&region, host, item))
        .unwrap_err();
    let denial = fault.denial().unwrap();
    assert!(matches!(denial, Denial::ThresholdExceeded { .. }));

    let message = fault.to_string();
    assert!(message.starts_with("OSSL Permission Error: X permission denied."));
    assert!(message.contains("Low"));
    assert!(message.contains("High"));
}

#[test]
fn test_estate_owner_scenario() {
    let estate_owner = Identity::random();
    let manager = Identity::random();
    let engine = engine(MapConfigSource::new().with("Allow_Y", "ESTATE_OWNER"));
    let region = FakeRegion::new()
        .with_estate_owner(estate_owner)
        .with_estate_manager(manager);

    let (host, item) = script_of(estate_owner);
    assert!(engine
        .ensure_authorized("Y", ThreatLevel::Severe, &context(&region, host, item))
        .is_ok());

    let (host, item) = script_of(manager);
    assert!(engine
        .ensure_authorized("Y", ThreatLevel::Severe, &context(&region, host, item))
        .is_err());
}

#[test]
fn test_globally_disabled_short_circuits() {
    let config = MapConfigSource::new()
        .with("AllowOSFunctions", "false")
        .with("Allow_osDie", "true");
    let engine = engine(config);
    let region = FakeRegion::new();
    let (host, item) = script_of(Identity::random());

    let fault = engine
        .ensure_authorized("osDie", ThreatLevel::None, &context(&region, host, item))
        .unwrap_err();
    assert!(matches!(
        fault.denial(),
        Some(Denial::GloballyDisabled { .. })
    ));
    assert_eq!(
        fault.to_string(),
        "OSSL Permission Error: All unsafe OSSL functions disabled"
    );
    // Nothing was compiled on the fast path
    assert!(engine.cache().is_empty());

    // The evaluator itself does not look at the switch
    assert!(engine
        .authorize("osDie", ThreatLevel::None, &context(&region, host, item))
        .is_ok());
}

#[test]
fn test_faults_addressed_to_owner() {
    let config = MapConfigSource::new()
        .with("PermissionErrorToOwner", "true")
        .with("Allow_osKickAvatar", "GOD");
    let engine = engine(config);
    let region = FakeRegion::new();
    let (host, item) = script_of(Identity::random());

    let fault = engine
        .ensure_authorized("osKickAvatar", ThreatLevel::Severe, &context(&region, host, item))
        .unwrap_err();
    assert_eq!(
        fault.to_string(),
        "(OWNER)OSSL Permission Error: osKickAvatar permission denied."
    );
}

#[test]
fn test_check_enabled() {
    assert!(engine(MapConfigSource::new()).check_enabled().is_ok());

    let disabled = engine(MapConfigSource::new().with("AllowOSFunctions", "no"));
    let fault = disabled.check_enabled().unwrap_err();
    assert_eq!(
        fault,
        ScriptFault::runtime("permission denied. All unsafe OSSL functions disabled")
    );
}

#[test]
fn test_ensure_cataloged_uses_catalog_rating() {
    let engine = engine(MapConfigSource::new().with("OSFunctionThreatLevel", "Moderate"));
    let region = FakeRegion::new();
    let (host, item) = script_of(Identity::random());
    let ctx = context(&region, host, item);

    // osGetRegionStats is Moderate, osConsoleCommand is Severe
    assert!(engine.ensure_cataloged("osGetRegionStats", &ctx).is_ok());
    let fault = engine.ensure_cataloged("osConsoleCommand", &ctx).unwrap_err();
    assert!(matches!(
        fault.denial(),
        Some(Denial::ThresholdExceeded {
            level: ThreatLevel::Severe,
            ceiling: ThreatLevel::Moderate,
            ..
        })
    ));

    let fault = engine.ensure_cataloged("osNotAThing", &ctx).unwrap_err();
    assert_eq!(
        fault,
        ScriptFault::UnknownOperation {
            operation: "osNotAThing".to_string()
        }
    );
}

#[test]
fn test_overrides_read_once_per_operation() {
    let source = Arc::new(CountingSource {
        inner: MapConfigSource::new().with("Allow_osSetRot", "GOD"),
        reads: AtomicUsize::new(0),
    });
    let engine = PolicyEngine::new(Arc::clone(&source) as Arc<dyn ConfigSource>);
    let region = FakeRegion::new();
    let (host, item) = script_of(Identity::random());
    let ctx = context(&region, host, item);

    for _ in 0..5 {
        let _ = engine.authorize("osSetRot", ThreatLevel::VeryHigh, &ctx);
        let _ = engine.authorize("osDie", ThreatLevel::Low, &ctx);
    }

    // Allow_ and Creators_ for each of the two operations
    assert_eq!(source.reads.load(Ordering::SeqCst), 4);
    assert_eq!(engine.cache().len(), 2);
    assert_eq!(engine.descriptor("osSetRot").grants(), Grants::GOD);
    assert!(engine.descriptor("osDie").is_threat_level());
}

#[test]
fn test_concurrent_authorization() {
    let admin = Identity::random();
    let config = MapConfigSource::new()
        .with("OSFunctionThreatLevel", "Moderate")
        .with("Allow_osNpcCreate", "GOD");
    let engine = Arc::new(engine(config));
    let region = Arc::new(FakeRegion::new().with_administrator(admin));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            let region = Arc::clone(&region);
            thread::spawn(move || {
                let caller = if i % 2 == 0 { admin } else { Identity::random() };
                let (host, item) = script_of(caller);
                let ctx = context(&region, host, item);
                let mut allowed = 0;
                for _ in 0..100 {
                    if engine.authorize("osNpcCreate", ThreatLevel::High, &ctx).is_ok() {
                        allowed += 1;
                    }
                    assert!(engine
                        .authorize("osGetRegionStats", ThreatLevel::Moderate, &ctx)
                        .is_ok());
                }
                (caller == admin, allowed)
            })
        })
        .collect();

    for handle in handles {
        let (is_admin, allowed) = handle.join().unwrap();
        assert_eq!(allowed, if is_admin { 100 } else { 0 });
    }
    assert_eq!(engine.cache().len(), 2);
}

#[test]
fn test_engine_from_configuration_file() {
    let creator = Identity::random();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "OSSL": {{
                "AllowOSFunctions": true,
                "OSFunctionThreatLevel": "VeryHigh",
                "PermissionErrorToOwner": false,
                "Allow_osConsoleCommand": false,
                "Allow_osNpcCreate": "",
                "Creators_osNpcCreate": "{creator}"
            }}
        }}"#
    )
    .unwrap();

    let source = ConfigLoader::new().load(file.path()).unwrap();
    let engine = engine(source);
    assert_eq!(engine.state().max_threat_level, ThreatLevel::VeryHigh);

    let region = FakeRegion::new();
    let (host, item) = script_of(creator);
    let ctx = context(&region, host, item);

    assert!(engine.ensure_cataloged("osNpcCreate", &ctx).is_ok());
    assert!(engine.ensure_cataloged("osSetRot", &ctx).is_ok());
    let fault = engine.ensure_cataloged("osConsoleCommand", &ctx).unwrap_err();
    assert!(matches!(
        fault.denial(),
        Some(Denial::ConfiguredDisabled { .. })
    ));
}

#[test]
fn test_compile_reports_warnings_without_caching() {
    let engine = engine(MapConfigSource::new().with("Allow_osSetRot", "GOD, wizard"));
    let compiled = engine.compile("osSetRot");
    assert_eq!(compiled.descriptor.grants(), Grants::GOD);
    assert_eq!(compiled.warnings.len(), 1);
    assert!(!engine.cache().contains("osSetRot"));
}
