//! Grammar-rule (nonterminal) kinds for the SystemVerilog CST
//!
//! The table at the bottom of this file is the single source of truth: one
//! line per production, numbered in table order starting at 1 (`0` is
//! reserved for untagged nodes). Productions that are preprocessing
//! directives carry a `#[preprocessing]` marker on the same line, so adding a
//! kind and classifying it is one edit.
//!
//! Numeric values follow table order and are not stable across versions.
//! Stringification is total; a code the table does not know renders
//! [`UNKNOWN_NODE_PREFIX`] followed by the decimal code.

use std::borrow::Cow;
use std::fmt;

/// Prefix of the fallback rendering for unregistered node codes.
pub const UNKNOWN_NODE_PREFIX: &str = "unregistered node kind #";

/// A grammar production kind.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKind(u16);

struct NodeKindInfo {
    name: &'static str,
    preprocessing: bool,
}

macro_rules! node_kinds {
    (@preprocessing) => { false };
    (@preprocessing preprocessing) => { true };
    ($($(#[$flag:ident])? $konst:ident => $name:literal,)*) => {
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[repr(u16)]
        enum Ordinal {
            UNTAGGED = 0,
            $($konst,)*
        }

        impl NodeKind {
            pub const UNTAGGED: NodeKind = NodeKind(Ordinal::UNTAGGED as u16);
            $(pub const $konst: NodeKind = NodeKind(Ordinal::$konst as u16);)*
        }

        static NODE_KINDS: &[NodeKindInfo] = &[
            NodeKindInfo { name: "kUntagged", preprocessing: false },
            $(NodeKindInfo {
                name: $name,
                preprocessing: node_kinds!(@preprocessing $($flag)?),
            },)*
        ];
    };
}

impl NodeKind {
    /// Wrap a raw code coming from the parser. Never fails.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw numeric code.
    pub const fn raw(self) -> u16 {
        self.0
    }

    fn info(self) -> Option<&'static NodeKindInfo> {
        NODE_KINDS.get(self.0 as usize)
    }

    /// True if this code is registered in the taxonomy.
    pub fn is_known(self) -> bool {
        self.info().is_some()
    }

    /// Declared name (`kModuleDeclaration`), or a fallback embedding the
    /// raw code for unregistered kinds.
    pub fn name(self) -> Cow<'static, str> {
        match self.info() {
            Some(info) => Cow::Borrowed(info.name),
            None => Cow::Owned(format!("{UNKNOWN_NODE_PREFIX}{}", self.0)),
        }
    }

    /// True exactly for the preprocessing directive kinds
    /// (`` `ifdef ``/`` `ifndef ``/`` `elsif ``/`` `else `` clauses,
    /// `` `define ``, `` `undef ``, `` `include ``).
    pub fn is_preprocessing(self) -> bool {
        self.info().is_some_and(|info| info.preprocessing)
    }

    /// Every registered kind, including `UNTAGGED`, in code order.
    pub fn all() -> impl Iterator<Item = NodeKind> {
        (0..NODE_KINDS.len()).map(|index| NodeKind(index as u16))
    }
}

/// Stringify a node kind (total function).
pub fn node_kind_name(kind: NodeKind) -> Cow<'static, str> {
    kind.name()
}

/// Preprocessing classification (total function).
pub fn is_preprocessing_node(kind: NodeKind) -> bool {
    kind.is_preprocessing()
}

impl From<u16> for NodeKind {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeKind({}, {:?})", self.0, self.name())
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

node_kinds! {
    DESCRIPTION => "kDescription",
    DESCRIPTION_LIST => "kDescriptionList",
    PACKAGE_ITEM_LIST => "kPackageItemList",
    PACKAGE_DECLARATION => "kPackageDeclaration",
    CLASS_DECLARATION => "kClassDeclaration",
    CLASS_HEADER => "kClassHeader",
    CLASS_ITEMS => "kClassItems",
    CLASS_CONSTRUCTOR => "kClassConstructor",
    CLASS_CONSTRUCTOR_PROTOTYPE => "kClassConstructorPrototype",
    FUNCTION_DECLARATION => "kFunctionDeclaration",
    FUNCTION_HEADER => "kFunctionHeader",
    FUNCTION_PROTOTYPE => "kFunctionPrototype",
    TASK_DECLARATION => "kTaskDeclaration",
    TASK_HEADER => "kTaskHeader",
    TASK_PROTOTYPE => "kTaskPrototype",
    CONFIG_DECLARATION => "kConfigDeclaration",
    DESIGN_STATEMENT => "kDesignStatement",
    DESIGN_STATEMENT_ITEMS => "kDesignStatementItems",
    CELL_IDENTIFIER => "kCellIdentifier",
    CONFIG_RULE_STATEMENT_LIST => "kConfigRuleStatementList",
    CONFIG_RULE_STATEMENT => "kConfigRuleStatement",
    PREPROCESSOR_BALANCED_CONFIG_RULE_STATEMENTS => "kPreprocessorBalancedConfigRuleStatements",
    INST_CLAUSE => "kInstClause",
    CELL_CLAUSE => "kCellClause",
    LIBLIST_CLAUSE => "kLiblistClause",
    USE_CLAUSE => "kUseClause",
    EXPRESSION => "kExpression",
    EXPRESSION_LIST => "kExpressionList",
    WITH_GROUP => "kWithGroup",
    BINARY_EXPRESSION => "kBinaryExpression",
    TERNARY_EXPRESSION => "kTernaryExpression",
    UNARY_PREFIX_EXPRESSION => "kUnaryPrefixExpression",
    REFERENCE => "kReference",
    FUNCTION_CALL => "kFunctionCall",
    REFERENCE_CALL_BASE => "kReferenceCallBase",
    METHOD_CALL_EXTENSION => "kMethodCallExtension",
    HIERARCHY_EXTENSION => "kHierarchyExtension",
    RANDOMIZE_METHOD_CALL_EXTENSION => "kRandomizeMethodCallExtension",
    BUILTIN_ARRAY_METHOD_CALL_EXTENSION => "kBuiltinArrayMethodCallExtension",
    MACRO_CALL_EXTENSION => "kMacroCallExtension",
    NEW_CALL => "kNewCall",
    SELECT_VARIABLE_DIMENSION => "kSelectVariableDimension",
    SELECT_VARIABLE_DIMENSION_LIST => "kSelectVariableDimensionList",
    EVENT_EXPRESSION => "kEventExpression",
    EVENT_EXPRESSION_LIST => "kEventExpressionList",
    LOCAL_ROOT => "kLocalRoot",
    QUALIFIED_ID => "kQualifiedId",
    UNQUALIFIED_ID => "kUnqualifiedId",
    MODULE_DECLARATION => "kModuleDeclaration",
    MODULE_HEADER => "kModuleHeader",
    MACRO_MODULE_DECLARATION => "kMacroModuleDeclaration",
    PROGRAM_DECLARATION => "kProgramDeclaration",
    INTERFACE_DECLARATION => "kInterfaceDeclaration",
    BEGIN => "kBegin",
    END => "kEnd",
    STATEMENT => "kStatement",
    NULL_STATEMENT => "kNullStatement",
    LABELED_STATEMENT => "kLabeledStatement",
    STATEMENT_LIST => "kStatementList",
    BLOCK_ITEM_STATEMENT_LIST => "kBlockItemStatementList",
    VOIDCAST => "kVoidcast",
    RANDOMIZE_FUNCTION_CALL => "kRandomizeFunctionCall",
    ATTRIBUTE => "kAttribute",
    BRACKET_GROUP => "kBracketGroup",
    BRACE_GROUP => "kBraceGroup",
    PAREN_GROUP => "kParenGroup",
    QUALIFIER_LIST => "kQualifierList",
    FORWARD_DECLARATION => "kForwardDeclaration",
    NULL_DECLARATION => "kNullDeclaration",
    SYSTEM_TF_CALL => "kSystemTFCall",
    EXTENDS_LIST => "kExtendsList",
    FORMAL_PARAMETER_LIST => "kFormalParameterList",
    ACTUAL_PARAMETER_POSITIONAL_LIST => "kActualParameterPositionalList",
    ACTUAL_PARAMETER_BY_NAME_LIST => "kActualParameterByNameList",
    ACTUAL_PARAMETER_LIST => "kActualParameterList",
    FORMAL_PARAMETER_LIST_DECLARATION => "kFormalParameterListDeclaration",
    DECLARATION_DIMENSIONS => "kDeclarationDimensions",
    DIMENSION_RANGE => "kDimensionRange",
    DIMENSION_SCALAR => "kDimensionScalar",
    DIMENSION_SLICE => "kDimensionSlice",
    DIMENSION_ASSOCIATIVE_TYPE => "kDimensionAssociativeType",
    DIMENSION_ASSOCIATIVE_INTEGRAL => "kDimensionAssociativeIntegral",
    PARAM_TYPE => "kParamType",
    PARAM_BY_NAME => "kParamByName",
    TRAILING_ASSIGN => "kTrailingAssign",
    PARAMETER_ASSIGN => "kParameterAssign",
    PARAMETER_ASSIGN_LIST => "kParameterAssignList",
    TYPE_ASSIGNMENT => "kTypeAssignment",
    TYPE_ASSIGNMENT_LIST => "kTypeAssignmentList",
    BASE_DIGITS => "kBaseDigits",
    NUMBER => "kNumber",
    INTERFACE_TYPE => "kInterfaceType",
    IMPLEMENTS_LIST => "kImplementsList",
    VARIABLE_DECLARATION_ASSIGNMENT_LIST => "kVariableDeclarationAssignmentList",
    VARIABLE_DECLARATION_ASSIGNMENT => "kVariableDeclarationAssignment",
    END_NEW => "kEndNew",
    LET_PORT_LIST => "kLetPortList",
    LET_PORT_ITEM => "kLetPortItem",
    PORT_ITEM => "kPortItem",
    PORT_ACTUAL_LIST => "kPortActualList",
    PORT_LIST => "kPortList",
    PORT => "kPort",
    ACTUAL_POSITIONAL_PORT => "kActualPositionalPort",
    ACTUAL_NAMED_PORT => "kActualNamedPort",
    PORT_REFERENCE => "kPortReference",
    PORT_REFERENCE_LIST => "kPortReferenceList",
    INSTANTIATION_BASE => "kInstantiationBase",
    INSTANTIATION_TYPE => "kInstantiationType",
    GATE_INSTANCE_REGISTER_VARIABLE_LIST => "kGateInstanceRegisterVariableList",
    REGISTER_VARIABLE => "kRegisterVariable",
    GATE_INSTANCE => "kGateInstance",
    GATE_INSTANCE_LIST => "kGateInstanceList",
    PRIMITIVE_GATE_INSTANCE => "kPrimitiveGateInstance",
    PRIMITIVE_GATE_INSTANCE_LIST => "kPrimitiveGateInstanceList",
    DATA_DECLARATION => "kDataDeclaration",
    PACKAGE_IMPORT_DECLARATION => "kPackageImportDeclaration",
    PACKAGE_IMPORT_LIST => "kPackageImportList",
    PACKAGE_IMPORT_ITEM => "kPackageImportItem",
    PACKAGE_IMPORT_ITEM_LIST => "kPackageImportItemList",
    PACKAGE_EXPORT_DECLARATION => "kPackageExportDeclaration",
    SCOPE_PREFIX => "kScopePrefix",
    PARAM_DECLARATION => "kParamDeclaration",
    TYPE_DECLARATION => "kTypeDeclaration",
    TYPE_REFERENCE => "kTypeReference",
    LET_DECLARATION => "kLetDeclaration",
    DATA_TYPE => "kDataType",
    DATA_TYPE_PRIMITIVE => "kDataTypePrimitive",
    DATA_TYPE_IMPLICIT_BASIC_ID => "kDataTypeImplicitBasicId",
    DATA_TYPE_IMPLICIT_BASIC_ID_DIMENSIONS => "kDataTypeImplicitBasicIdDimensions",
    DATA_TYPE_IMPLICIT_ID_DIMENSIONS => "kDataTypeImplicitIdDimensions",
    ASSIGN_MODIFY_STATEMENT => "kAssignModifyStatement",
    NONBLOCKING_ASSIGNMENT_STATEMENT => "kNonblockingAssignmentStatement",
    BLOCKING_ASSIGNMENT_STATEMENT => "kBlockingAssignmentStatement",
    CONTINUOUS_ASSIGNMENT_STATEMENT => "kContinuousAssignmentStatement",
    ASSIGNMENT_STATEMENT => "kAssignmentStatement",
    CASE_STATEMENT => "kCaseStatement",
    CONDITIONAL_STATEMENT => "kConditionalStatement",
    IF_CLAUSE => "kIfClause",
    ELSE_CLAUSE => "kElseClause",
    IF_HEADER => "kIfHeader",
    IF_BODY => "kIfBody",
    ELSE_BODY => "kElseBody",
    DISABLE_STATEMENT => "kDisableStatement",
    EVENT_TRIGGER_STATEMENT => "kEventTriggerStatement",
    FOR_LOOP_STATEMENT => "kForLoopStatement",
    LOOP_HEADER => "kLoopHeader",
    JUMP_STATEMENT => "kJumpStatement",
    FOR_SPEC => "kForSpec",
    FOR_INITIALIZATION => "kForInitialization",
    FOR_INITIALIZATION_LIST => "kForInitializationList",
    FOR_CONDITION => "kForCondition",
    FOR_STEP_LIST => "kForStepList",
    FOREVER_LOOP_STATEMENT => "kForeverLoopStatement",
    REPEAT_LOOP_STATEMENT => "kRepeatLoopStatement",
    WHILE_LOOP_STATEMENT => "kWhileLoopStatement",
    DO_WHILE_LOOP_STATEMENT => "kDoWhileLoopStatement",
    FOREACH_LOOP_STATEMENT => "kForeachLoopStatement",
    LP_VALUE => "kLPValue",
    OPEN_RANGE_LIST => "kOpenRangeList",
    VALUE_RANGE => "kValueRange",
    STREAMING_CONCATENATION => "kStreamingConcatenation",
    CASE_ITEM_LIST => "kCaseItemList",
    CASE_ITEM => "kCaseItem",
    DEFAULT_ITEM => "kDefaultItem",
    CASE_PATTERN_ITEM_LIST => "kCasePatternItemList",
    CASE_PATTERN_ITEM => "kCasePatternItem",
    CASE_INSIDE_ITEM_LIST => "kCaseInsideItemList",
    CASE_INSIDE_ITEM => "kCaseInsideItem",
    PATTERN => "kPattern",
    PATTERN_LIST => "kPatternList",
    MEMBER_PATTERN => "kMemberPattern",
    MEMBER_PATTERN_LIST => "kMemberPatternList",
    INCREMENT_DECREMENT_EXPRESSION => "kIncrementDecrementExpression",
    PAR_BLOCK => "kParBlock",
    PROCEDURAL_TIMING_CONTROL_STATEMENT => "kProceduralTimingControlStatement",
    SEQ_BLOCK => "kSeqBlock",
    WAIT_STATEMENT => "kWaitStatement",
    ASSERTION_STATEMENT => "kAssertionStatement",
    ACTION_BLOCK => "kActionBlock",
    ARGUMENT_LIST => "kArgumentList",
    EVENT_CONTROL => "kEventControl",
    HIERARCHY_SEGMENT => "kHierarchySegment",
    HIERARCHY_SEGMENT_LIST => "kHierarchySegmentList",
    #[preprocessing] PREPROCESSOR_IFDEF_CLAUSE => "kPreprocessorIfdefClause",
    #[preprocessing] PREPROCESSOR_IFNDEF_CLAUSE => "kPreprocessorIfndefClause",
    #[preprocessing] PREPROCESSOR_ELSIF_CLAUSE => "kPreprocessorElsifClause",
    #[preprocessing] PREPROCESSOR_ELSE_CLAUSE => "kPreprocessorElseClause",
    #[preprocessing] PREPROCESSOR_DEFINE => "kPreprocessorDefine",
    #[preprocessing] PREPROCESSOR_UNDEF => "kPreprocessorUndef",
    #[preprocessing] PREPROCESSOR_INCLUDE => "kPreprocessorInclude",
    PREPROCESSOR_BALANCED_STATEMENTS => "kPreprocessorBalancedStatements",
    PREPROCESSOR_BALANCED_PORT_DECLARATIONS => "kPreprocessorBalancedPortDeclarations",
    PREPROCESSOR_BALANCED_CLASS_ITEMS => "kPreprocessorBalancedClassItems",
    PREPROCESSOR_BALANCED_PACKAGE_ITEMS => "kPreprocessorBalancedPackageItems",
    PREPROCESSOR_BALANCED_MODULE_ITEMS => "kPreprocessorBalancedModuleItems",
    PREPROCESSOR_BALANCED_GENERATE_ITEMS => "kPreprocessorBalancedGenerateItems",
    PREPROCESSOR_BALANCED_DESCRIPTION_ITEMS => "kPreprocessorBalancedDescriptionItems",
    MACRO_ARG_LIST => "kMacroArgList",
    MACRO_CALL => "kMacroCall",
    ASSIGNMENT_PATTERN => "kAssignmentPattern",
    PATTERN_EXPRESSION => "kPatternExpression",
    MIN_TYP_MAX_LIST => "kMinTypMaxList",
    CONST_REF => "kConstRef",
    INTERFACE_PORT_HEADER => "kInterfacePortHeader",
    TF_PORT_DECLARATION => "kTFPortDeclaration",
    TF_VARIABLE_IDENTIFIER => "kTFVariableIdentifier",
    TF_VARIABLE_IDENTIFIER_LIST => "kTFVariableIdentifierList",
    FUNCTION_ITEM_LIST => "kFunctionItemList",
    STREAM_EXPRESSION_LIST => "kStreamExpressionList",
    CAST => "kCast",
    FUNCTION_ENDLABEL => "kFunctionEndlabel",
    LABEL => "kLabel",
    ARRAY_WITH_PREDICATE => "kArrayWithPredicate",
    DYNAMIC_ARRAY_NEW => "kDynamicArrayNew",
    DELAY => "kDelay",
    DELAY_VALUE => "kDelayValue",
    DELAY_VALUE_LIST => "kDelayValueList",
    CLASS_NEW => "kClassNew",
    POUND_ZERO => "kPoundZero",
    PACKED_DIMENSIONS => "kPackedDimensions",
    UNPACKED_DIMENSIONS => "kUnpackedDimensions",
    IDENTIFIER_LIST => "kIdentifierList",
    IDENTIFIER_UNPACKED_DIMENSIONS => "kIdentifierUnpackedDimensions",
    IDENTIFIER_UNPACKED_DIMENSIONS_LIST => "kIdentifierUnpackedDimensionsList",
    PORT_IDENTIFIER_LIST => "kPortIdentifierList",
    WITH_CONSTRAINTS => "kWithConstraints",
    CONSTRAINT_BLOCK_ITEM_LIST => "kConstraintBlockItemList",
    PREPROCESSOR_BALANCED_CONSTRAINT_BLOCK_ITEM => "kPreprocessorBalancedConstraintBlockItem",
    CONSTRAINT_EXPRESSION => "kConstraintExpression",
    PREPROCESSOR_BALANCED_CONSTRAINT_EXPRESSIONS => "kPreprocessorBalancedConstraintExpressions",
    DISTRIBUTION => "kDistribution",
    DISTRIBUTION_ITEM_LIST => "kDistributionItemList",
    DISTRIBUTION_ITEM => "kDistributionItem",
    CONSTRAINT_EXPRESSION_LIST => "kConstraintExpressionList",
    CONSTRAINT_PRIMARY_LIST => "kConstraintPrimaryList",
    UNIQUENESS_CONSTRAINT => "kUniquenessConstraint",
    CONSTRAINT_DECLARATION => "kConstraintDeclaration",
    CONSTRAINT_PROTOTYPE => "kConstraintPrototype",
    CYCLE_RANGE => "kCycleRange",
    CYCLE_DELAY => "kCycleDelay",
    CYCLE_DELAY_RANGE => "kCycleDelayRange",
    CYCLE_DELAY_CONST_RANGE => "kCycleDelayConstRange",
    MODULE_ATTRIBUTE_FOREIGN => "kModuleAttributeForeign",
    PORT_DECLARATION_LIST => "kPortDeclarationList",
    PORT_DECLARATION => "kPortDeclaration",
    MODULE_ITEM_LIST => "kModuleItemList",
    MODULE_BLOCK => "kModuleBlock",
    NET_VARIABLE_DECLARATION_ASSIGN => "kNetVariableDeclarationAssign",
    NET_DECLARATION_ASSIGNMENT => "kNetDeclarationAssignment",
    NET_VARIABLE => "kNetVariable",
    NET_ALIAS => "kNetAlias",
    NET_ALIAS_LVALUE_LIST => "kNetAliasLvalueList",
    MODULE_PORT_DECLARATION => "kModulePortDeclaration",
    GENERATE_REGION => "kGenerateRegion",
    GENERATE_ITEM_LIST => "kGenerateItemList",
    PARAMETER_OVERRIDE => "kParameterOverride",
    DEF_PARAM_ASSIGN_LIST => "kDefParamAssignList",
    GATE_INSTANTIATION => "kGateInstantiation",
    BLOCK_IDENTIFIER => "kBlockIdentifier",
    ASSERTION_ITEM => "kAssertionItem",
    ANALOG_STATEMENT => "kAnalogStatement",
    BRANCH_PROBE_EXPRESSION => "kBranchProbeExpression",
    BIND_DIRECTIVE => "kBindDirective",
    BIND_TARGET_INSTANCE_LIST => "kBindTargetInstanceList",
    BIND_TARGET_INSTANCE => "kBindTargetInstance",
    CONTINUOUS_ASSIGN => "kContinuousAssign",
    LOOP_GENERATE_CONSTRUCT => "kLoopGenerateConstruct",
    CONDITIONAL_GENERATE_CONSTRUCT => "kConditionalGenerateConstruct",
    CASE_GENERATE_CONSTRUCT => "kCaseGenerateConstruct",
    GENERATE_IF => "kGenerateIf",
    GENERATE_IF_CLAUSE => "kGenerateIfClause",
    GENERATE_IF_HEADER => "kGenerateIfHeader",
    GENERATE_IF_BODY => "kGenerateIfBody",
    GENERATE_ELSE_CLAUSE => "kGenerateElseClause",
    GENERATE_ELSE_BODY => "kGenerateElseBody",
    GENERATE_CASE_ITEM_LIST => "kGenerateCaseItemList",
    GENERATE_CASE_ITEM => "kGenerateCaseItem",
    GENERATE_DEFAULT_ITEM => "kGenerateDefaultItem",
    GENERATE_BLOCK => "kGenerateBlock",
    SPECIFY_BLOCK => "kSpecifyBlock",
    SPECIFY_ITEM => "kSpecifyItem",
    SPECIFY_ITEM_LIST => "kSpecifyItemList",
    TIMEUNITS_DECLARATION => "kTimeunitsDeclaration",
    TYPE_IDENTIFIER_ID => "kTypeIdentifierId",
    NET_DECLARATION => "kNetDeclaration",
    ASSIGNMENT_LIST => "kAssignmentList",
    DEFAULT_CLOCKING_STATEMENT => "kDefaultClockingStatement",
    DEFAULT_DISABLE_STATEMENT => "kDefaultDisableStatement",
    CLOCKING_DECLARATION => "kClockingDeclaration",
    CLOCKING_ITEM_LIST => "kClockingItemList",
    CLOCKING_ITEM => "kClockingItem",
    DEFAULT_SKEW => "kDefaultSkew",
    CLOCKING_SKEW => "kClockingSkew",
    CLOCKING_DIRECTION => "kClockingDirection",
    CLOCKING_ASSIGN_LIST => "kClockingAssignList",
    CLOCKING_ASSIGN => "kClockingAssign",
    GENVAR_DECLARATION => "kGenvarDeclaration",
    DPI_IMPORT_ITEM => "kDPIImportItem",
    DPI_EXPORT_ITEM => "kDPIExportItem",
    PROPERTY_SPEC_DISABLE_IFF => "kPropertySpecDisableIff",
    PROPERTY_PREFIX_EXPRESSION => "kPropertyPrefixExpression",
    PROPERTY_EXPRESSION_INDEX => "kPropertyExpressionIndex",
    PROPERTY_IF_ELSE => "kPropertyIfElse",
    PROPERTY_SIMPLE_SEQUENCE_EXPRESSION => "kPropertySimpleSequenceExpression",
    PROPERTY_CASE_ITEM => "kPropertyCaseItem",
    PROPERTY_DEFAULT_ITEM => "kPropertyDefaultItem",
    PROPERTY_CASE_ITEM_LIST => "kPropertyCaseItemList",
    PROPERTY_CASE_STATEMENT => "kPropertyCaseStatement",
    PROPERTY_IMPLICATION_LIST => "kPropertyImplicationList",
    PROPERTY_SPEC => "kPropertySpec",
    EXPRESSION_DISTRIBUTION_LIST => "kExpressionDistributionList",
    TIMESCALE_DIRECTIVE => "kTimescaleDirective",
    TIME_LITERAL => "kTimeLiteral",
    TOP_LEVEL_DIRECTIVE => "kTopLevelDirective",
    SPEC_PARAM => "kSpecParam",
    SPEC_PARAM_LIST => "kSpecParamList",
    SPEC_PARAM_DECLARATION => "kSpecParamDeclaration",
    SPECIFY_PATH_DECLARATION => "kSpecifyPathDeclaration",
    SPECIFY_EDGE_PATH => "kSpecifyEdgePath",
    SPECIFY_SIMPLE_PATH => "kSpecifySimplePath",
    SPECIFY_REFERENCE_EVENT => "kSpecifyReferenceEvent",
    SPECIFY_NOTIFIER => "kSpecifyNotifier",
    SPECIFY_PATH_IDENTIFIER => "kSpecifyPathIdentifier",
    EDGE_DESCRIPTOR_LIST => "kEdgeDescriptorList",
    ALWAYS_STATEMENT => "kAlwaysStatement",
    INITIAL_STATEMENT => "kInitialStatement",
    FINAL_STATEMENT => "kFinalStatement",
    MODPORT_DECLARATION => "kModportDeclaration",
    MODPORT_ITEM => "kModportItem",
    MODPORT_ITEM_LIST => "kModportItemList",
    MODPORT_PORT_LIST => "kModportPortList",
    MODPORT_TF_PORTS_DECLARATION => "kModportTFPortsDeclaration",
    MODPORT_SIMPLE_PORTS_DECLARATION => "kModportSimplePortsDeclaration",
    MODPORT_CLOCKING_PORTS_DECLARATION => "kModportClockingPortsDeclaration",
    MODPORT_SIMPLE_PORT => "kModportSimplePort",
    ENUM_TYPE => "kEnumType",
    ENUM_NAME => "kEnumName",
    ENUM_NAME_LIST => "kEnumNameList",
    PACKED_SIGNING => "kPackedSigning",
    UNION_TYPE => "kUnionType",
    STRUCT_TYPE => "kStructType",
    STRUCT_UNION_MEMBER => "kStructUnionMember",
    STRUCT_UNION_MEMBER_LIST => "kStructUnionMemberList",
    SEQUENCE_DECLARATION => "kSequenceDeclaration",
    SEQUENCE_DECLARATION_FINAL_EXPR => "kSequenceDeclarationFinalExpr",
    SEQUENCE_PORT_LIST => "kSequencePortList",
    SEQUENCE_PORT_ITEM => "kSequencePortItem",
    SEQUENCE_PORT_TYPE_ID => "kSequencePortTypeId",
    SEQUENCE_MATCH_ITEM_LIST => "kSequenceMatchItemList",
    SEQUENCE_SPEC => "kSequenceSpec",
    PROPERTY_DECLARATION => "kPropertyDeclaration",
    PROPERTY_PORT_LIST => "kPropertyPortList",
    PROPERTY_PORT_ITEM => "kPropertyPortItem",
    PROPERTY_PORT_MODIFIER_LIST => "kPropertyPortModifierList",
    PROPERTY_ACTUAL_ARG => "kPropertyActualArg",
    ASSERTION_VARIABLE_DECLARATION_LIST => "kAssertionVariableDeclarationList",
    ASSERTION_VARIABLE_DECLARATION => "kAssertionVariableDeclaration",
    VAR_DATA_TYPE_IMPLICIT_BASIC_ID_DIMENSIONS => "kVarDataTypeImplicitBasicIdDimensions",
    SEQUENCE_DELAY_RANGE => "kSequenceDelayRange",
    SEQUENCE_DELAY_REPETITION => "kSequenceDelayRepetition",
    CONSECUTIVE_REPETITION => "kConsecutiveRepetition",
    NONCONSECUTIVE_REPETITION => "kNonconsecutiveRepetition",
    GOTO_REPETITION => "kGotoRepetition",
    SEQUENCE_REPETITION_EXPRESSION => "kSequenceRepetitionExpression",
    COVERGROUP_DECLARATION => "kCovergroupDeclaration",
    COVERGROUP_HEADER => "kCovergroupHeader",
    COVERAGE_SPEC_OPTION_LIST => "kCoverageSpecOptionList",
    COVERAGE_OPTION => "kCoverageOption",
    COVERAGE_EVENT => "kCoverageEvent",
    COVERAGE_BLOCK_EVENT_OR_LIST => "kCoverageBlockEventOrList",
    COVERAGE_BLOCK_EVENT_EXPRESSION => "kCoverageBlockEventExpression",
    COVER_CROSS => "kCoverCross",
    CROSS_BODY_ITEM_LIST => "kCrossBodyItemList",
    CROSS_ITEM_LIST => "kCrossItemList",
    BINS_SELECTION => "kBinsSelection",
    SELECT_CONDITION => "kSelectCondition",
    COVER_POINT => "kCoverPoint",
    IFF_EXPRESSION => "kIffExpression",
    BIN_OPTION_LIST => "kBinOptionList",
    PREPROCESSOR_BALANCED_BINS_OR_OPTIONS => "kPreprocessorBalancedBinsOrOptions",
    COVERAGE_BIN => "kCoverageBin",
    COVERAGE_BIN_RHS => "kCoverageBinRhs",
    SPEC_COVER_DECLARATION => "kSpecCoverDeclaration",
    INTERFACE_CLASS_DECLARATION => "kInterfaceClassDeclaration",
    INTERFACE_CLASS_ITEM_LIST => "kInterfaceClassItemList",
    INTERFACE_CLASS_METHOD => "kInterfaceClassMethod",
    DECLARATION_EXTENDS_LIST => "kDeclarationExtendsList",
    DISCIPLINE_DECLARATION => "kDisciplineDeclaration",
    DISCIPLINE_ITEM_LIST => "kDisciplineItemList",
    DISCIPLINE_DOMAIN_BINDING => "kDisciplineDomainBinding",
    DISCIPLINE_POTENTIAL => "kDisciplinePotential",
    DISCIPLINE_FLOW => "kDisciplineFlow",
    UDP_PORT_LIST => "kUdpPortList",
    UDP_PORT_DECLARATION_LIST => "kUdpPortDeclarationList",
    UDP_PORT_DECLARATION => "kUdpPortDeclaration",
    UDP_INITIAL => "kUdpInitial",
    UDP_BODY => "kUdpBody",
    UDP_ENTRY_LIST => "kUdpEntryList",
    UDP_COMB_ENTRY => "kUdpCombEntry",
    UDP_SEQUENCE_ENTRY => "kUdpSequenceEntry",
    UDP_INPUT_LIST => "kUdpInputList",
    UDP_INPUT_DECLARATION_LIST => "kUdpInputDeclarationList",
    UDP_PRIMITIVE => "kUdpPrimitive",
    RAND_SEQUENCE_STATEMENT => "kRandSequenceStatement",
    PRODUCTION_LIST => "kProductionList",
    PRODUCTION => "kProduction",
    RAND_SEQUENCE_RULE_LIST => "kRandSequenceRuleList",
    RAND_SEQUENCE_RULE => "kRandSequenceRule",
    RAND_JOIN => "kRandJoin",
    WEIGHT_SPECIFICATION => "kWeightSpecification",
    RAND_SEQUENCE_PRODUCTION_LIST => "kRandSequenceProductionList",
    PRODUCTION_ITEMS_LIST => "kProductionItemsList",
    PRODUCTION_ITEM => "kProductionItem",
    RAND_SEQUENCE_CONDITIONAL => "kRandSequenceConditional",
    RAND_SEQUENCE_LOOP => "kRandSequenceLoop",
    RAND_SEQUENCE_CASE => "kRandSequenceCase",
    RAND_SEQUENCE_CASE_ITEM_LIST => "kRandSequenceCaseItemList",
    RAND_SEQUENCE_CASE_ITEM => "kRandSequenceCaseItem",
    RAND_SEQUENCE_DEFAULT_ITEM => "kRandSequenceDefaultItem",
    TYPE_INFO => "kTypeInfo",
}
