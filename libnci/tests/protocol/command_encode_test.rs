use libnci::constants::*;
use libnci::protocol::{Command, DiscoveryConfig};
use libnci::{DeactivationType, RfTechMode};

#[test]
fn core_commands() {
    let reset = Command::CoreReset {
        reset_config: false,
    };
    assert_eq!((reset.gid(), reset.oid()), (NCI_GID_CORE, NCI_OID_CORE_RESET));
    assert_eq!(reset.encode().unwrap(), vec![NCI_RESET_KEEP_CONFIG]);

    let init = Command::CoreInit;
    assert_eq!((init.gid(), init.oid()), (NCI_GID_CORE, NCI_OID_CORE_INIT));
    assert!(init.encode().unwrap().is_empty());
}

#[test]
fn rf_discover_with_custom_frequency() {
    let cmd = Command::RfDiscover {
        configs: vec![
            DiscoveryConfig::new(RfTechMode::PassivePollF),
            DiscoveryConfig {
                mode: RfTechMode::PassiveListenF,
                frequency: 0x0a,
            },
        ],
    };
    assert_eq!((cmd.gid(), cmd.oid()), (NCI_GID_RF, NCI_OID_RF_DISCOVER));
    assert_eq!(cmd.encode().unwrap(), vec![0x02, 0x02, 0x01, 0x82, 0x0a]);
}

#[test]
fn rf_deactivate() {
    let cmd = Command::RfDeactivate(DeactivationType::Discovery);
    assert_eq!((cmd.gid(), cmd.oid()), (NCI_GID_RF, NCI_OID_RF_DEACTIVATE));
    assert_eq!(cmd.encode().unwrap(), vec![0x03]);
}
