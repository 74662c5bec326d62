use crate::tr;

// Purge
tr!(PURGING_WHOLE_REPO, "Purging whole repository at {}");
tr!(PURGING_SCOPE, "Purging: {}");

tr!(PURGED, "purged");
tr!(NOT_DUE, "not due");
tr!(FAILED, "failed");
tr!(REASON_BOOTSTRAP, "no previous purge recorded");
tr!(REASON_BUILDS, "{} builds since the last purge");
tr!(REASON_DAYS, "{} days since the last purge");
tr!(SOME_REPOS_FAILED, "Purging failed for {} repositories.");

// Init
tr!(INIT_SCOPES, "Enter comma-separated group ids to purge:");
tr!(INIT_SCOPES_HELP, "Leave empty to use the global setting, or to purge the whole repository.");
tr!(INIT_BUILDS, "Purge every how many builds?");
tr!(INIT_DAYS, "Purge every how many days?");
tr!(INIT_INHERIT_HELP, "Leave empty to use the global setting.");
tr!(INIT_REPOS, "Select repositories used by the project:");
tr!(INIT_DONE, "Setup is completed. Run `purge-local-repo run` before each build.");

tr!(REPO_PRIVATE, "Private (`.repository` inside the workspace)");
tr!(REPO_DEFAULT, "Default (`~/.m2/repository`)");

tr!(MUST_BE_POSITIVE, "Must be > 0!");
tr!(NOT_A_NUMBER, "is no valid number");

// Global
tr!(GLOBAL_SAVED, "Global defaults are saved.");
tr!(GLOBAL_CLEARED, "Global defaults are cleared.");

// Status
tr!(STATUS_EFFECTIVE, "Effective configuration:");
tr!(SCOPES, "Group ids");
tr!(NUMBER_OF_BUILDS, "Number of builds");
tr!(NUMBER_OF_DAYS, "Number of days");
tr!(WHOLE_REPOSITORY, "whole repository");
tr!(NOT_SET, "not set");
tr!(NEVER_PURGED, "never purged");
tr!(LAST_PURGE, "last purge at build {1}, {2}");
tr!(STATE_UNREADABLE, "state is unreadable");

tr!(NO_REPOSITORIES, "No repositories configured for this project. Run `purge-local-repo init` or pass `--repository`.");
