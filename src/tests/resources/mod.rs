mod cluster_tests;
