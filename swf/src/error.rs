/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

aws_json::service_errors! {
    pub enum SwfError {
        DomainAlreadyExistsFault => "DomainAlreadyExistsFault",
        DomainDeprecatedFault => "DomainDeprecatedFault",
        /// The named resource does not exist or is not accessible.
        UnknownResourceFault => "UnknownResourceFault",
        TypeDeprecatedFault => "TypeDeprecatedFault",
        WorkflowExecutionAlreadyStartedFault => "WorkflowExecutionAlreadyStartedFault",
        LimitExceededFault => "LimitExceededFault",
        OperationNotPermittedFault => "OperationNotPermittedFault",
        DefaultUndefinedFault => "DefaultUndefinedFault",
    }
}
