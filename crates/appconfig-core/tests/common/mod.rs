//! Shared fixtures for integration tests

#![allow(dead_code)]

use appconfig_core::{IngestedMessage, SavedSnapshot, Snapshot};

/// Envelope captured from the stream for host `srv24w0m15`
///
/// Carries shipper metadata alongside the identity fields; the embedded
/// snapshot has 25 records across the simple, parameter and endpoint kinds.
pub const RAW_ENVELOPE: &str = r##"{"@timestamp":"2019-10-24T21:03:12.009Z","@metadata":{"beat":"filebeat","type":"doc","version":"6.7.2","topic":"srv-appconfig-event-json"},"easi":"srv:wm:app:packapi","host":{"name":"srv24w0m15.example.com"},"log":"appconfig-install.state.json","message":"{\"data\": [{\"appdomain\": null, \"k\": \"node\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"environment\", \"type\": \"simple\", \"v\": \"srv24w0m15\"}, {\"appdomain\": null, \"k\": \"operatingsystemrelease\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"facter\", \"type\": \"simple\", \"v\": \"7.6.1810\"}, {\"appdomain\": null, \"k\": \"packapi\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"etmeta\", \"type\": \"simple\", \"v\": \"sit20191024.103-0\"}, {\"appdomain\": null, \"k\": \"easi\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"environment\", \"type\": \"simple\", \"v\": \"srv-wm-app-packapi\"}, {\"appdomain\": null, \"k\": \"uptime_days\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"facter\", \"type\": \"simple\", \"v\": \"17\"}, {\"appdomain\": null, \"k\": \"appdomain\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"etmeta\", \"type\": \"simple\", \"v\": \"srv1m7\"}, {\"appdomain\": null, \"k\": \"processorcount\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"facter\", \"type\": \"simple\", \"v\": \"2\"}, {\"appdomain\": null, \"k\": \"memorysize_mb\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"facter\", \"type\": \"simple\", \"v\": \"3789.76\"}, {\"appdomain\": null, \"k\": \"timezone\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"facter\", \"type\": \"simple\", \"v\": \"EDT\"}, {\"appdomain\": \"srv1m7\", \"k\": \"advisorxml\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"etmeta\", \"tpls\": [\"config/advisor.conf\"], \"type\": \"endpoint\", \"v\": \"wmax.srv.example.com:9030:http:srv1m7\"}, {\"appdomain\": null, \"k\": \"ports__ADVISOR_HTTP_PORT\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"default\", \"tpls\": [\"config/advisor.conf\"], \"type\": \"parameter\", \"v\": \"8081\"}, {\"appdomain\": null, \"k\": \"endpoint__advisorxml__port\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"etmeta\", \"tpls\": [\"config/advisor.conf\"], \"type\": \"parameter\", \"v\": \"9030\"}, {\"appdomain\": null, \"k\": \"ports__ADVISOR_GRPC_PORT\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"default\", \"tpls\": [\"config/envoy.yaml\"], \"type\": \"parameter\", \"v\": \"9081\"}, {\"appdomain\": null, \"k\": \"ports__AGGREGATOR_HTTP_PORT\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"default\", \"tpls\": [\"config/aggregator.conf\"], \"type\": \"parameter\", \"v\": \"8080\"}, {\"appdomain\": null, \"k\": \"properties__deq-ack-timeout\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"default\", \"tpls\": [\"config/advisor.conf\"], \"type\": \"parameter\", \"v\": \"30\"}, {\"appdomain\": null, \"k\": \"environment__e_ir\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"environment\", \"tpls\": [\"config/envoy.yaml\"], \"type\": \"parameter\", \"v\": \"/example/srv-wm-app-packapi\"}, {\"appdomain\": null, \"k\": \"ports__HEALTHCHECK_PORT\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"default\", \"tpls\": [\"opt/tools/monitor.cfg\"], \"type\": \"parameter\", \"v\": \"8000\"}, {\"appdomain\": null, \"k\": \"ports__BROKER_GRPC_PORT\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"default\", \"tpls\": [\"config/envoy.yaml\"], \"type\": \"parameter\", \"v\": \"9082\"}, {\"appdomain\": null, \"k\": \"ports__BROKER_HTTP_PORT\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"default\", \"tpls\": [\"config/broker.conf\"], \"type\": \"parameter\", \"v\": \"8082\"}, {\"appdomain\": null, \"k\": \"environment__e_node\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"environment\", \"tpls\": [\"opt/tools/monitor.cfg\"], \"type\": \"parameter\", \"v\": \"srv24w0m15\"}, {\"appdomain\": null, \"k\": \"environment__e_envoy_root\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"environment\", \"tpls\": [\"config/supervisor/envoy.conf\"], \"type\": \"parameter\", \"v\": \"/example/srv-wm-app-packapi/packages/envoy\"}, {\"appdomain\": null, \"k\": \"endpoint__advisorxml__endpoint\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"etmeta\", \"tpls\": [\"config/advisor.conf\"], \"type\": \"parameter\", \"v\": \"wmax.srv.example.com\"}, {\"appdomain\": null, \"k\": \"environment__e_packapi_root\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"environment\", \"tpls\": [\"config/supervisor/grpc.conf\"], \"type\": \"parameter\", \"v\": \"/example/srv-wm-app-packapi/packages/packapi\"}, {\"appdomain\": null, \"k\": \"ports__AGGREGATOR_GRPC_PORT\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"default\", \"tpls\": [\"config/envoy.yaml\"], \"type\": \"parameter\", \"v\": \"9080\"}, {\"appdomain\": null, \"k\": \"ports__ENVOY_HTTP_PORT\", \"pkg\": \"packapi-sit20191024.103-0\", \"src\": \"appconfig\", \"tpls\": [\"config/envoy.yaml\"], \"type\": \"parameter\", \"v\": \"8000\"}], \"dttm\": 1571950979.575358}","offset":92453,"node":"srv24w0m15","datacenter":"m15","input":{"type":"log"},"source":"/example/srv-wm-app-packapi/logs/appconfig-install.state.json","prospector":{"type":"log"},"env":"srv","workgroup":"w05","pipeline":{"topic":"srv-appconfig-event-json","source":"filebeat"},"streamSource":"/opt/streams/source/filebeat/appconfigjson.hcl","asi":"wm:app:packapi","beat":{"name":"srv24w0m15.example.com","hostname":"srv24w0m15.example.com","version":"6.7.2"}}"##;

pub fn fixture_message() -> IngestedMessage {
    IngestedMessage::from_json(RAW_ENVELOPE).expect("fixture envelope decodes")
}

pub fn fixture_snapshot() -> Snapshot {
    fixture_message()
        .to_snapshot()
        .expect("fixture snapshot decodes")
}

pub fn fixture_saved_snapshot() -> SavedSnapshot {
    fixture_message()
        .to_saved_snapshot()
        .expect("fixture saved snapshot decodes")
}

/// Build an envelope around an arbitrary embedded document
pub fn envelope(easi: &str, node: &str, embedded: &str) -> IngestedMessage {
    IngestedMessage::new("srv", "wm:app:packapi", easi, node, embedded)
}
