//! Bundled standard module definitions.
//!
//! Each entry is `(descriptor, parent, subid)`. Modules are listed in
//! dependency order so every parent is defined before its children.

type Module = (&'static str, &'static [(&'static str, &'static str, u32)]);

pub(crate) static MODULES: &[Module] = &[
    ("SNMPv2-SMI", SNMPV2_SMI),
    ("SNMPv2-MIB", SNMPV2_MIB),
    ("IF-MIB", IF_MIB),
    ("IP-MIB", IP_MIB),
    ("TCP-MIB", TCP_MIB),
    ("UDP-MIB", UDP_MIB),
    ("RFC1213-MIB", RFC1213_MIB),
    ("HOST-RESOURCES-MIB", HOST_RESOURCES_MIB),
    ("SNMP-FRAMEWORK-MIB", SNMP_FRAMEWORK_MIB),
];

const SNMPV2_SMI: &[(&str, &str, u32)] = &[
    ("ccitt", "", 0),
    ("iso", "", 1),
    ("joint-iso-ccitt", "", 2),
    ("zeroDotZero", "ccitt", 0),
    ("org", "iso", 3),
    ("dod", "org", 6),
    ("internet", "dod", 1),
    ("directory", "internet", 1),
    ("mgmt", "internet", 2),
    ("mib-2", "mgmt", 1),
    ("transmission", "mib-2", 10),
    ("experimental", "internet", 3),
    ("private", "internet", 4),
    ("enterprises", "private", 1),
    ("security", "internet", 5),
    ("snmpV2", "internet", 6),
    ("snmpDomains", "snmpV2", 1),
    ("snmpProxys", "snmpV2", 2),
    ("snmpModules", "snmpV2", 3),
];

const SNMPV2_MIB: &[(&str, &str, u32)] = &[
    ("system", "mib-2", 1),
    ("sysDescr", "system", 1),
    ("sysObjectID", "system", 2),
    ("sysUpTime", "system", 3),
    ("sysContact", "system", 4),
    ("sysName", "system", 5),
    ("sysLocation", "system", 6),
    ("sysServices", "system", 7),
    ("sysORLastChange", "system", 8),
    ("sysORTable", "system", 9),
    ("sysOREntry", "sysORTable", 1),
    ("sysORIndex", "sysOREntry", 1),
    ("sysORID", "sysOREntry", 2),
    ("sysORDescr", "sysOREntry", 3),
    ("sysORUpTime", "sysOREntry", 4),
    ("snmp", "mib-2", 11),
    ("snmpInPkts", "snmp", 1),
    ("snmpOutPkts", "snmp", 2),
    ("snmpInBadVersions", "snmp", 3),
    ("snmpInBadCommunityNames", "snmp", 4),
    ("snmpInBadCommunityUses", "snmp", 5),
    ("snmpInASNParseErrs", "snmp", 6),
    ("snmpInTooBigs", "snmp", 8),
    ("snmpInNoSuchNames", "snmp", 9),
    ("snmpInBadValues", "snmp", 10),
    ("snmpInReadOnlys", "snmp", 11),
    ("snmpInGenErrs", "snmp", 12),
    ("snmpInTotalReqVars", "snmp", 13),
    ("snmpInTotalSetVars", "snmp", 14),
    ("snmpInGetRequests", "snmp", 15),
    ("snmpInGetNexts", "snmp", 16),
    ("snmpInSetRequests", "snmp", 17),
    ("snmpInGetResponses", "snmp", 18),
    ("snmpInTraps", "snmp", 19),
    ("snmpOutTooBigs", "snmp", 20),
    ("snmpOutNoSuchNames", "snmp", 21),
    ("snmpOutBadValues", "snmp", 22),
    ("snmpOutGenErrs", "snmp", 24),
    ("snmpOutGetRequests", "snmp", 25),
    ("snmpOutGetNexts", "snmp", 26),
    ("snmpOutSetRequests", "snmp", 27),
    ("snmpOutGetResponses", "snmp", 28),
    ("snmpOutTraps", "snmp", 29),
    ("snmpEnableAuthenTraps", "snmp", 30),
    ("snmpSilentDrops", "snmp", 31),
    ("snmpProxyDrops", "snmp", 32),
    ("snmpMIB", "snmpModules", 1),
    ("snmpMIBObjects", "snmpMIB", 1),
    ("snmpTrap", "snmpMIBObjects", 4),
    ("snmpTrapOID", "snmpTrap", 1),
    ("snmpTrapEnterprise", "snmpTrap", 3),
    ("snmpTraps", "snmpMIBObjects", 5),
    ("coldStart", "snmpTraps", 1),
    ("warmStart", "snmpTraps", 2),
    ("authenticationFailure", "snmpTraps", 5),
    ("snmpSet", "snmpMIBObjects", 6),
    ("snmpSetSerialNo", "snmpSet", 1),
];

const IF_MIB: &[(&str, &str, u32)] = &[
    ("interfaces", "mib-2", 2),
    ("ifNumber", "interfaces", 1),
    ("ifTable", "interfaces", 2),
    ("ifEntry", "ifTable", 1),
    ("ifIndex", "ifEntry", 1),
    ("ifDescr", "ifEntry", 2),
    ("ifType", "ifEntry", 3),
    ("ifMtu", "ifEntry", 4),
    ("ifSpeed", "ifEntry", 5),
    ("ifPhysAddress", "ifEntry", 6),
    ("ifAdminStatus", "ifEntry", 7),
    ("ifOperStatus", "ifEntry", 8),
    ("ifLastChange", "ifEntry", 9),
    ("ifInOctets", "ifEntry", 10),
    ("ifInUcastPkts", "ifEntry", 11),
    ("ifInNUcastPkts", "ifEntry", 12),
    ("ifInDiscards", "ifEntry", 13),
    ("ifInErrors", "ifEntry", 14),
    ("ifInUnknownProtos", "ifEntry", 15),
    ("ifOutOctets", "ifEntry", 16),
    ("ifOutUcastPkts", "ifEntry", 17),
    ("ifOutNUcastPkts", "ifEntry", 18),
    ("ifOutDiscards", "ifEntry", 19),
    ("ifOutErrors", "ifEntry", 20),
    ("ifOutQLen", "ifEntry", 21),
    ("ifSpecific", "ifEntry", 22),
    ("ifMIB", "mib-2", 31),
    ("ifMIBObjects", "ifMIB", 1),
    ("ifXTable", "ifMIBObjects", 1),
    ("ifXEntry", "ifXTable", 1),
    ("ifName", "ifXEntry", 1),
    ("ifInMulticastPkts", "ifXEntry", 2),
    ("ifInBroadcastPkts", "ifXEntry", 3),
    ("ifOutMulticastPkts", "ifXEntry", 4),
    ("ifOutBroadcastPkts", "ifXEntry", 5),
    ("ifHCInOctets", "ifXEntry", 6),
    ("ifHCInUcastPkts", "ifXEntry", 7),
    ("ifHCInMulticastPkts", "ifXEntry", 8),
    ("ifHCInBroadcastPkts", "ifXEntry", 9),
    ("ifHCOutOctets", "ifXEntry", 10),
    ("ifHCOutUcastPkts", "ifXEntry", 11),
    ("ifHCOutMulticastPkts", "ifXEntry", 12),
    ("ifHCOutBroadcastPkts", "ifXEntry", 13),
    ("ifLinkUpDownTrapEnable", "ifXEntry", 14),
    ("ifHighSpeed", "ifXEntry", 15),
    ("ifPromiscuousMode", "ifXEntry", 16),
    ("ifConnectorPresent", "ifXEntry", 17),
    ("ifAlias", "ifXEntry", 18),
    ("ifCounterDiscontinuityTime", "ifXEntry", 19),
    ("ifTableLastChange", "ifMIBObjects", 5),
    ("linkDown", "snmpTraps", 3),
    ("linkUp", "snmpTraps", 4),
];

const IP_MIB: &[(&str, &str, u32)] = &[
    ("ip", "mib-2", 4),
    ("ipForwarding", "ip", 1),
    ("ipDefaultTTL", "ip", 2),
    ("ipInReceives", "ip", 3),
    ("ipInHdrErrors", "ip", 4),
    ("ipInAddrErrors", "ip", 5),
    ("ipForwDatagrams", "ip", 6),
    ("ipInUnknownProtos", "ip", 7),
    ("ipInDiscards", "ip", 8),
    ("ipInDelivers", "ip", 9),
    ("ipOutRequests", "ip", 10),
    ("ipOutDiscards", "ip", 11),
    ("ipOutNoRoutes", "ip", 12),
    ("ipReasmTimeout", "ip", 13),
    ("ipReasmReqds", "ip", 14),
    ("ipReasmOKs", "ip", 15),
    ("ipReasmFails", "ip", 16),
    ("ipFragOKs", "ip", 17),
    ("ipFragFails", "ip", 18),
    ("ipFragCreates", "ip", 19),
    ("ipAddrTable", "ip", 20),
    ("ipAddrEntry", "ipAddrTable", 1),
    ("ipAdEntAddr", "ipAddrEntry", 1),
    ("ipAdEntIfIndex", "ipAddrEntry", 2),
    ("ipAdEntNetMask", "ipAddrEntry", 3),
    ("ipAdEntBcastAddr", "ipAddrEntry", 4),
    ("ipAdEntReasmMaxSize", "ipAddrEntry", 5),
    ("ipNetToMediaTable", "ip", 22),
    ("ipNetToMediaEntry", "ipNetToMediaTable", 1),
    ("ipNetToMediaIfIndex", "ipNetToMediaEntry", 1),
    ("ipNetToMediaPhysAddress", "ipNetToMediaEntry", 2),
    ("ipNetToMediaNetAddress", "ipNetToMediaEntry", 3),
    ("ipNetToMediaType", "ipNetToMediaEntry", 4),
    ("ipRoutingDiscards", "ip", 23),
    ("icmp", "mib-2", 5),
    ("icmpInMsgs", "icmp", 1),
    ("icmpInErrors", "icmp", 2),
    ("icmpInDestUnreachs", "icmp", 3),
    ("icmpInEchos", "icmp", 8),
    ("icmpInEchoReps", "icmp", 9),
    ("icmpOutMsgs", "icmp", 14),
    ("icmpOutErrors", "icmp", 15),
    ("icmpOutDestUnreachs", "icmp", 16),
    ("icmpOutEchos", "icmp", 21),
    ("icmpOutEchoReps", "icmp", 22),
];

const TCP_MIB: &[(&str, &str, u32)] = &[
    ("tcp", "mib-2", 6),
    ("tcpRtoAlgorithm", "tcp", 1),
    ("tcpRtoMin", "tcp", 2),
    ("tcpRtoMax", "tcp", 3),
    ("tcpMaxConn", "tcp", 4),
    ("tcpActiveOpens", "tcp", 5),
    ("tcpPassiveOpens", "tcp", 6),
    ("tcpAttemptFails", "tcp", 7),
    ("tcpEstabResets", "tcp", 8),
    ("tcpCurrEstab", "tcp", 9),
    ("tcpInSegs", "tcp", 10),
    ("tcpOutSegs", "tcp", 11),
    ("tcpRetransSegs", "tcp", 12),
    ("tcpConnTable", "tcp", 13),
    ("tcpConnEntry", "tcpConnTable", 1),
    ("tcpConnState", "tcpConnEntry", 1),
    ("tcpConnLocalAddress", "tcpConnEntry", 2),
    ("tcpConnLocalPort", "tcpConnEntry", 3),
    ("tcpConnRemAddress", "tcpConnEntry", 4),
    ("tcpConnRemPort", "tcpConnEntry", 5),
    ("tcpInErrs", "tcp", 14),
    ("tcpOutRsts", "tcp", 15),
];

const UDP_MIB: &[(&str, &str, u32)] = &[
    ("udp", "mib-2", 7),
    ("udpInDatagrams", "udp", 1),
    ("udpNoPorts", "udp", 2),
    ("udpInErrors", "udp", 3),
    ("udpOutDatagrams", "udp", 4),
    ("udpTable", "udp", 5),
    ("udpEntry", "udpTable", 1),
    ("udpLocalAddress", "udpEntry", 1),
    ("udpLocalPort", "udpEntry", 2),
];

const RFC1213_MIB: &[(&str, &str, u32)] = &[
    ("at", "mib-2", 3),
    ("atTable", "at", 1),
    ("atEntry", "atTable", 1),
    ("atIfIndex", "atEntry", 1),
    ("atPhysAddress", "atEntry", 2),
    ("atNetAddress", "atEntry", 3),
    ("ipRouteTable", "ip", 21),
    ("ipRouteEntry", "ipRouteTable", 1),
    ("ipRouteDest", "ipRouteEntry", 1),
    ("ipRouteIfIndex", "ipRouteEntry", 2),
    ("ipRouteMetric1", "ipRouteEntry", 3),
    ("ipRouteNextHop", "ipRouteEntry", 7),
    ("ipRouteType", "ipRouteEntry", 8),
    ("ipRouteProto", "ipRouteEntry", 9),
    ("ipRouteAge", "ipRouteEntry", 10),
    ("ipRouteMask", "ipRouteEntry", 11),
    ("egp", "mib-2", 8),
    ("egpInMsgs", "egp", 1),
    ("egpInErrors", "egp", 2),
    ("egpOutMsgs", "egp", 3),
    ("egpOutErrors", "egp", 4),
    ("egpNeighborLoss", "snmpTraps", 6),
];

const HOST_RESOURCES_MIB: &[(&str, &str, u32)] = &[
    ("host", "mib-2", 25),
    ("hrSystem", "host", 1),
    ("hrSystemUptime", "hrSystem", 1),
    ("hrSystemDate", "hrSystem", 2),
    ("hrSystemInitialLoadDevice", "hrSystem", 3),
    ("hrSystemInitialLoadParameters", "hrSystem", 4),
    ("hrSystemNumUsers", "hrSystem", 5),
    ("hrSystemProcesses", "hrSystem", 6),
    ("hrSystemMaxProcesses", "hrSystem", 7),
    ("hrStorage", "host", 2),
    ("hrMemorySize", "hrStorage", 2),
    ("hrStorageTable", "hrStorage", 3),
    ("hrStorageEntry", "hrStorageTable", 1),
    ("hrStorageIndex", "hrStorageEntry", 1),
    ("hrStorageType", "hrStorageEntry", 2),
    ("hrStorageDescr", "hrStorageEntry", 3),
    ("hrStorageAllocationUnits", "hrStorageEntry", 4),
    ("hrStorageSize", "hrStorageEntry", 5),
    ("hrStorageUsed", "hrStorageEntry", 6),
    ("hrStorageAllocationFailures", "hrStorageEntry", 7),
    ("hrDevice", "host", 3),
    ("hrDeviceTable", "hrDevice", 2),
    ("hrDeviceEntry", "hrDeviceTable", 1),
    ("hrDeviceIndex", "hrDeviceEntry", 1),
    ("hrDeviceType", "hrDeviceEntry", 2),
    ("hrDeviceDescr", "hrDeviceEntry", 3),
    ("hrDeviceID", "hrDeviceEntry", 4),
    ("hrDeviceStatus", "hrDeviceEntry", 5),
    ("hrDeviceErrors", "hrDeviceEntry", 6),
    ("hrProcessorTable", "hrDevice", 3),
    ("hrProcessorEntry", "hrProcessorTable", 1),
    ("hrProcessorFrwID", "hrProcessorEntry", 1),
    ("hrProcessorLoad", "hrProcessorEntry", 2),
    ("hrSWRun", "host", 4),
    ("hrSWOSIndex", "hrSWRun", 1),
    ("hrSWRunTable", "hrSWRun", 2),
    ("hrSWRunEntry", "hrSWRunTable", 1),
    ("hrSWRunIndex", "hrSWRunEntry", 1),
    ("hrSWRunName", "hrSWRunEntry", 2),
    ("hrSWRunID", "hrSWRunEntry", 3),
    ("hrSWRunPath", "hrSWRunEntry", 4),
    ("hrSWRunParameters", "hrSWRunEntry", 5),
    ("hrSWRunType", "hrSWRunEntry", 6),
    ("hrSWRunStatus", "hrSWRunEntry", 7),
];

const SNMP_FRAMEWORK_MIB: &[(&str, &str, u32)] = &[
    ("snmpFrameworkMIB", "snmpModules", 10),
    ("snmpFrameworkMIBObjects", "snmpFrameworkMIB", 2),
    ("snmpEngine", "snmpFrameworkMIBObjects", 1),
    ("snmpEngineID", "snmpEngine", 1),
    ("snmpEngineBoots", "snmpEngine", 2),
    ("snmpEngineTime", "snmpEngine", 3),
    ("snmpEngineMaxMessageSize", "snmpEngine", 4),
];
