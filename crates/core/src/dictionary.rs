//! Human-readable labels for HL7 v2 fields.
//!
//! Label wording is fixed: clinical users match on the exact text, so the
//! tables below must not be reworded or renumbered.

/// Label for `field_index` (1-based) of `segment_type`.
///
/// Unknown segment types, index 0 and indices past the end of a table fall
/// back to `"{segment_type}{field_index}"`.
pub fn label(segment_type: &str, field_index: usize) -> String {
    known_label(segment_type, field_index)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{segment_type}{field_index}"))
}

/// Label from the static tables, without the synthesized fallback.
pub fn known_label(segment_type: &str, field_index: usize) -> Option<&'static str> {
    let table = table_for(segment_type)?;
    field_index
        .checked_sub(1)
        .and_then(|slot| table.get(slot))
        .copied()
}

/// Segment types with a label table.
pub const KNOWN_SEGMENTS: &[&str] = &[
    "MSH", "EVN", "PID", "NK1", "PV1", "PV2", "AL1", "DG1", "IN1", "GT1", "FT1", "ORC", "OBR",
    "OBX",
];

fn table_for(segment_type: &str) -> Option<&'static [&'static str]> {
    let table = match segment_type {
        "MSH" => MSH,
        "EVN" => EVN,
        "PID" => PID,
        "NK1" => NK1,
        "PV1" => PV1,
        "PV2" => PV2,
        "AL1" => AL1,
        "DG1" => DG1,
        "IN1" => IN1,
        "GT1" => GT1,
        "FT1" => FT1,
        "ORC" => ORC,
        "OBR" => OBR,
        "OBX" => OBX,
        _ => return None,
    };
    Some(table)
}

// Tables are indexed by field number minus one.

const MSH: &[&str] = &[
    "MSH1 - Field Separator",
    "MSH2 - Encoding Characters",
    "MSH3 - Sending Application",
    "MSH4 - Sending Facility",
    "MSH5 - Receiving Application",
    "MSH6 - Receiving Facility",
    "MSH7 - Date/Time",
    "MSH8 - Security",
    "MSH9 - Message Type",
    "MSH10 - Message Control ID",
    "MSH11 - Processing ID",
    "MSH12 - Version ID",
    "MSH13 - Sequence Number",
    "MSH14 - Continuation Pointer",
    "MSH15 - Accept Acknowledgment Type",
    "MSH16 - Application Acknowledgment Type",
    "MSH17 - Country Code",
    "MSH18 - Character Set",
    "MSH19 - Principal Language",
    "MSH20 - Alternate Character Set",
];

const EVN: &[&str] = &[
    "EVN1 - Event Type Code",
    "EVN2 - Recorded Date/Time",
    "EVN3 - Date/Time Planned Event",
    "EVN4 - Event Reason Code",
    "EVN5 - Operator ID",
    "EVN6 - Event Occurred",
    "EVN7 - Event Facility",
];

const PID: &[&str] = &[
    "PID1 - Set ID",
    "PID2 - Patient ID",
    "PID3 - Patient Identifier List",
    "PID4 - Alternate Patient ID",
    "PID5 - Patient Name",
    "PID6 - Mother's Maiden Name",
    "PID7 - Date/Time of Birth",
    "PID8 - Sex",
    "PID9 - Patient Alias",
    "PID10 - Race",
    "PID11 - Patient Address",
    "PID12 - County Code",
    "PID13 - Phone Number - Home",
    "PID14 - Phone Number - Business",
    "PID15 - Primary Language",
    "PID16 - Marital Status",
    "PID17 - Religion",
    "PID18 - Patient Account Number",
    "PID19 - SSN Number",
    "PID20 - Driver's License Number",
    "PID21 - Mother's Identifier",
    "PID22 - Ethnic Group",
    "PID23 - Birth Place",
    "PID24 - Multiple Birth Indicator",
    "PID25 - Birth Order",
    "PID26 - Citizenship",
    "PID27 - Veterans Military Status",
    "PID28 - Nationality",
    "PID29 - Patient Death Date and Time",
    "PID30 - Patient Death Indicator",
];

const NK1: &[&str] = &[
    "NK1-1 - Set ID",
    "NK1-2 - Name",
    "NK1-3 - Relationship",
    "NK1-4 - Address",
    "NK1-5 - Phone Number",
    "NK1-6 - Business Phone Number",
    "NK1-7 - Contact Role",
    "NK1-8 - Start Date",
    "NK1-9 - End Date",
    "NK1-10 - Next of Kin/Associated Parties Job Title",
];

const PV1: &[&str] = &[
    "PV1 - Set ID",
    "PV1 - Patient Class",
    "PV1 - Assigned Patient Location",
    "PV1 - Admission Type",
    "PV1 - Preadmit Number",
    "PV1 - Prior Patient Location",
    "PV1 - Attending Physician",
    "PV1 - Referring Physician",
    "PV1 - Consulting Physician",
    "PV1 - Hospital Service",
    "PV1 - Temporary Location",
    "PV1 - Preadmit Test Indicator",
    "PV1 - Readmission Indicator",
    "PV1 - Admit Source",
    "PV1 - Ambulatory Status",
    "PV1 - VIP Indicator",
    "PV1 - Admitting Physician",
    "PV1 - Patient Type",
    "PV1 - Visit Number",
    "PV1 - Financial Class",
    "PV1 - Charge Price Indicator",
    "PV1 - Courtesy Code",
    "PV1 - Credit Rating",
    "PV1 - Contract Code",
    "PV1 - Contract Effective Date",
    "PV1 - Contract Amount",
    "PV1 - Contract Period",
    "PV1 - Interest Code",
    "PV1 - Transfer to Bad Debt Code",
    "PV1 - Transfer to Bad Debt Date",
    "PV1 - Bad Debt Agency Code",
    "PV1 - Bad Debt Transfer Amount",
    "PV1 - Bad Debt Recovery Amount",
    "PV1 - Delete Account Indicator",
    "PV1 - Delete Account Date",
    "PV1 - Discharge Disposition",
    "PV1 - Discharged to Location",
    "PV1 - Diet Type",
    "PV1 - Servicing Facility",
    "PV1 - Bed Status",
    "PV1 - Account Status",
    "PV1 - Pending Location",
    "PV1 - Prior Temporary Location",
    "PV1 - Admit Date/Time",
    "PV1 - Discharge Date/Time",
    "PV1 - Current Patient Balance",
    "PV1 - Total Charges",
    "PV1 - Total Adjustments",
    "PV1 - Total Payments",
    "PV1 - Alternate Visit ID",
    "PV1 - Visit Indicator",
    "PV1 - Other Healthcare Provider",
];

const PV2: &[&str] = &[
    "PV2-1 - Prior Pending Location",
    "PV2-2 - Accommodation Code",
    "PV2-3 - Admit Reason",
    "PV2-4 - Transfer Reason",
    "PV2-5 - Patient Valuables",
    "PV2-6 - Patient Valuables Location",
    "PV2-7 - Visit User Code",
    "PV2-8 - Expected Admit Date/Time",
    "PV2-9 - Expected Discharge Date/Time",
    "PV2-10 - Estimated Length of Inpatient Stay",
];

const AL1: &[&str] = &[
    "AL1-1 - Set ID",
    "AL1-2 - Allergy Type",
    "AL1-3 - Allergy Code/Mnemonic/Description",
    "AL1-4 - Allergy Severity",
    "AL1-5 - Allergy Reaction",
    "AL1-6 - Identification Date",
];

const DG1: &[&str] = &[
    "DG1-1 - Set ID",
    "DG1-2 - Diagnosis Coding Method",
    "DG1-3 - Diagnosis Code",
    "DG1-4 - Diagnosis Description",
    "DG1-5 - Diagnosis Date/Time",
    "DG1-6 - Diagnosis Type",
    "DG1-7 - Major Diagnostic Category",
    "DG1-8 - Diagnostic Related Group",
    "DG1-9 - DRG Approval Indicator",
    "DG1-10 - DRG Grouper Review Code",
];

const IN1: &[&str] = &[
    "IN1-1 - Set ID",
    "IN1-2 - Insurance Plan ID",
    "IN1-3 - Insurance Company ID",
    "IN1-4 - Insurance Company Name",
    "IN1-5 - Insurance Company Address",
    "IN1-6 - Insurance Co. Contact Person",
    "IN1-7 - Insurance Co Phone Number",
    "IN1-8 - Group Number",
    "IN1-9 - Group Name",
    "IN1-10 - Insured's Group Emp ID",
];

const GT1: &[&str] = &[
    "GT1-1 - Set ID",
    "GT1-2 - Guarantor Number",
    "GT1-3 - Guarantor Name",
    "GT1-4 - Guarantor Spouse Name",
    "GT1-5 - Guarantor Address",
    "GT1-6 - Guarantor Phone Number - Home",
    "GT1-7 - Guarantor Phone Number - Business",
    "GT1-8 - Guarantor Date/Time of Birth",
    "GT1-9 - Guarantor Sex",
    "GT1-10 - Guarantor Type",
];

const FT1: &[&str] = &[
    "FT1-1 - Set ID",
    "FT1-2 - Transaction ID",
    "FT1-3 - Transaction Batch ID",
    "FT1-4 - Transaction Date",
    "FT1-5 - Transaction Posting Date",
    "FT1-6 - Transaction Type",
    "FT1-7 - Transaction Code",
    "FT1-8 - Transaction Description",
    "FT1-9 - Transaction Description Alt",
    "FT1-10 - Transaction Quantity",
];

const ORC: &[&str] = &[
    "ORC-1 - Order Control",
    "ORC-2 - Placer Order Number",
    "ORC-3 - Filler Order Number",
    "ORC-4 - Placer Group Number",
    "ORC-5 - Order Status",
    "ORC-6 - Response Flag",
    "ORC-7 - Quantity/Timing",
    "ORC-8 - Parent",
    "ORC-9 - Date/Time of Transaction",
    "ORC-10 - Entered By",
];

const OBR: &[&str] = &[
    "OBR1 - Set ID",
    "OBR2 - Placer Order Number",
    "OBR3 - Filler Order Number",
    "OBR4 - Universal Service ID",
    "OBR5 - Priority",
    "OBR6 - Requested Date/Time",
    "OBR7 - Observation Date/Time",
    "OBR8 - Observation End Date/Time",
    "OBR9 - Collection Volume",
    "OBR10 - Collector Identifier",
    "OBR11 - Specimen Action Code",
    "OBR12 - Danger Code",
    "OBR13 - Relevant Clinical Information",
    "OBR14 - Specimen Received Date/Time",
    "OBR15 - Specimen Source",
    "OBR16 - Ordering Provider",
    "OBR17 - Order Callback Phone Number",
    "OBR18 - Placer Field 1",
    "OBR19 - Placer Field 2",
    "OBR20 - Filler Field 1",
    "OBR21 - Filler Field 2",
    "OBR22 - Results Rpt/Status Chng - Date/Time",
    "OBR23 - Charge to Practice",
    "OBR24 - Diagnostic Service Section ID",
    "OBR25 - Result Status",
    "OBR26 - Parent Result",
    "OBR27 - Quantity/Timing",
    "OBR28 - Result Copies To",
    "OBR29 - Parent",
    "OBR30 - Transportation Mode",
    "OBR31 - Reason for Study",
    "OBR32 - Principal Result Interpreter",
    "OBR33 - Assistant Result Interpreter",
    "OBR34 - Technician",
    "OBR35 - Transcriptionist",
    "OBR36 - Scheduled Date/Time",
    "OBR37 - Number of Sample Containers",
    "OBR38 - Transport Logistics of Collected Sample",
    "OBR39 - Collector's Comment",
    "OBR40 - Transport Arrangement Responsibility",
    "OBR41 - Transport Arranged",
    "OBR42 - Escort Required",
    "OBR43 - Planned Patient Transport Comment",
    "OBR44 - Procedure Code",
    "OBR45 - Procedure Code Modifier",
    "OBR46 - Placer Supplemental Service Information",
    "OBR47 - Filler Supplemental Service Information",
    "OBR48 - Medically Necessary Duplicate Procedure Reason",
    "OBR49 - Result Handling",
    "OBR50 - Parent Universal Service Identifier",
];

const OBX: &[&str] = &[
    "OBX1 - Set ID",
    "OBX2 - Value Type",
    "OBX3 - Observation Identifier",
    "OBX4 - Observation Sub-ID",
    "OBX5 - Observation Value",
    "OBX6 - Units",
    "OBX7 - References Range",
    "OBX8 - Abnormal Flags",
    "OBX9 - Probability",
    "OBX10 - Nature of Abnormal Test",
    "OBX11 - Observation Result Status",
    "OBX12 - Date/Time of the Observation",
    "OBX13 - Producer's ID",
    "OBX14 - Responsible Observer",
    "OBX15 - Observation Method",
    "OBX16 - Equipment Instance Identifier",
    "OBX17 - Date/Time of the Analysis",
    "OBX18 - Observation Site",
    "OBX19 - Observation Instance Identifier",
    "OBX20 - Mood Code",
    "OBX21 - Performing Organization Name",
    "OBX22 - Performing Organization Address",
    "OBX23 - Performing Organization Medical Director",
    "OBX24 - Patient Results Release Category",
    "OBX25 - Root Cause",
    "OBX26 - Local Process Control",
    "OBX27 - Observation Type",
    "OBX28 - Observation Sub-type",
    "OBX29 - Observation Value from Parent Result",
    "OBX30 - Observation Value from Child Result",
];
